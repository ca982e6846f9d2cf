use thiserror::Error;

use sightfix_core::Objective;

/// Errors that can occur when evaluating an objective.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The objective call failed.
    #[error("objective call failed")]
    Objective(#[source] E),

    /// The objective returned `NaN` or an infinite value.
    #[error("objective returned a non-finite value ({0})")]
    NonFinite(f64),
}

/// Evaluates the objective at `x` and checks that the value is finite.
///
/// # Errors
///
/// Returns an error if the objective fails or produces a non-finite value.
pub fn evaluate<O, const N: usize>(objective: &O, x: &[f64; N]) -> Result<f64, EvalError<O::Error>>
where
    O: Objective<N>,
{
    let value = objective.evaluate(x).map_err(EvalError::Objective)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite(value))
    }
}
