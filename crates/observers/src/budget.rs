//! An observer that bounds the number of evaluations.

use sightfix_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solver once it has emitted `max_evals` events.
///
/// Every solver event corresponds to one objective evaluation, so this caps
/// the total work of a call regardless of grid resolution or iteration limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalBudget {
    max_evals: usize,
    evals: usize,
}

impl EvalBudget {
    /// Creates a budget that allows `max_evals` evaluations.
    #[must_use]
    pub fn new(max_evals: usize) -> Self {
        Self {
            max_evals,
            evals: 0,
        }
    }

    /// Returns the number of evaluations observed so far.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals
    }

    /// Returns true once the budget has been used up.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.evals >= self.max_evals
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for EvalBudget {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.evals += 1;
        self.is_exhausted().then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sightfix_solvers::optimization::clustered::{self, Action, Config, Status};

    #[test]
    fn stops_after_budget() {
        let mut budget = EvalBudget::new(3);

        let actions: Vec<Option<Action>> = (0..4).map(|i| budget.observe(&i)).collect();

        assert_eq!(
            actions,
            vec![None, None, Some(Action::StopEarly), Some(Action::StopEarly)]
        );
        assert!(budget.is_exhausted());
    }

    #[test]
    fn caps_clustered_search_work() {
        let objective = |x: &[f64; 2]| (x[0] - 0.2).powi(2) + (x[1] + 0.1).powi(2);

        // The default grid has far more than 500 nodes, so sampling is cut short.
        let solution = clustered::search(&objective, 1, &Config::default(), EvalBudget::new(500))
            .expect("budget stop is not an error");

        assert_eq!(solution.evals, 500);
        assert_eq!(solution.minima[0].status, Status::StoppedByObserver);
    }
}
