//! An observer that stops once the objective is small enough.

use sightfix_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a solver once an event reports an objective at or below `tolerance`.
///
/// Useful with sum-of-squares objectives whose minimum is known to be zero:
/// the search can stop as soon as an exact fit is seen. Events without an
/// objective (failures) are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoodEnough {
    tolerance: f64,
}

impl GoodEnough {
    /// Creates an observer that stops at or below `tolerance`.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.objective() <= self.tolerance).then(A::stop_early)
    }
}
