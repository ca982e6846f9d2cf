//! Solvers that minimize a scalar objective.
//!
//! An [`Objective`] maps solver variables `x: [f64; N]` to a scalar value.
//! Solvers in this module search for the `x` that minimizes that value.
//!
//! # Solvers
//!
//! - [`clustered`] — derivative-free global search over the unit disk that
//!   reports the best one or two local minima
//!
//! [`Objective`]: sightfix_core::Objective

mod evaluate;

pub use evaluate::{EvalError, evaluate};

pub mod clustered;
