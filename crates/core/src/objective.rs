use std::convert::Infallible;

/// A scalar objective over `N` solver variables.
///
/// Objectives must be deterministic, always producing the same value for a
/// given `x`. Solvers evaluate them many times, in any order, and may share one
/// objective between independent solver calls, so implementations should not
/// rely on interior mutability.
///
/// Plain closures of the form `Fn(&[f64; N]) -> f64` implement `Objective`
/// with an [`Infallible`] error type.
pub trait Objective<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Each objective defines its own `Error` type to represent domain-specific failures.
    fn evaluate(&self, x: &[f64; N]) -> Result<f64, Self::Error>;
}

/// Blanket implementation for objective closures.
impl<F, const N: usize> Objective<N> for F
where
    F: Fn(&[f64; N]) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: &[f64; N]) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
