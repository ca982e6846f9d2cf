use crate::optimization::evaluate::EvalError;

/// Errors that can occur during the clustered search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("output count must be 1 or 2, got {0}")]
    InvalidCount(usize),

    #[error("objective returned non-finite value {value} at {x:?}")]
    NonFinite { x: [f64; 2], value: f64 },

    #[error("objective error: {0}")]
    Objective(Box<dyn std::error::Error + Send + Sync>),

    #[error("no valid sample in the search domain")]
    NoSolution,
}

impl Error {
    /// Converts an evaluation failure at `x` into a search error.
    pub(super) fn from_eval<E>(x: [f64; 2], error: EvalError<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match error {
            EvalError::Objective(source) => Self::Objective(Box::new(source)),
            EvalError::NonFinite(value) => Self::NonFinite { x, value },
        }
    }
}
