//! Numerical solvers for the Sightfix toolkit.
//!
//! # Modules
//!
//! - [`optimization`] — derivative-free minimization of an
//!   [`Objective`](sightfix_core::Objective)

pub mod optimization;
