//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanReject`] — actions that can discard an evaluated point
//!
//! # Example
//!
//! ```rust
//! use sightfix_core::Observer;
//! use sightfix_observers::traits::{CanReject, HasObjective};
//!
//! /// Discards every point whose objective exceeds a ceiling.
//! struct Ceiling(f64);
//!
//! impl<E: HasObjective, A: CanReject> Observer<E, A> for Ceiling {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() > self.0).then(A::reject)
//!     }
//! }
//! ```

use sightfix_core::Objective;

use sightfix_solvers::optimization::clustered;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can discard an evaluated point.
pub trait CanReject {
    /// Returns the action that discards the current point.
    fn reject() -> Self;
}

// --- HasObjective for clustered::Event ---

impl<O> HasObjective for clustered::Event<'_, O>
where
    O: Objective<2>,
{
    fn objective(&self) -> f64 {
        match self {
            clustered::Event::Sampled { point } | clustered::Event::Refined { point, .. } => {
                point.objective
            }
            clustered::Event::Failed { .. } => f64::NAN,
        }
    }
}

// --- Action impls ---

impl CanStopEarly for clustered::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanReject for clustered::Action {
    fn reject() -> Self {
        Self::Reject
    }
}
