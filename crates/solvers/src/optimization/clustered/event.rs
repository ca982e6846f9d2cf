use sightfix_core::Objective;

use crate::optimization::evaluate::EvalError;

use super::Point;

/// The search phase in which an evaluation happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Coarse evaluation of the grid.
    Sampling,

    /// Simplex refinement of the seed with the given rank.
    Refinement { seed: usize },
}

/// Events emitted by the clustered search.
pub enum Event<'a, O>
where
    O: Objective<2>,
{
    /// Successful evaluation of a grid node.
    Sampled {
        /// The evaluated node.
        point: Point,
    },

    /// Successful evaluation of a refinement candidate.
    Refined {
        /// Rank of the seed being refined, starting at zero.
        seed: usize,

        /// The evaluated candidate.
        point: Point,

        /// The best point of this refinement so far.
        best: Point,

        /// Largest distance from the best vertex to another simplex vertex.
        size: f64,
    },

    /// The objective failed or returned a non-finite value.
    Failed {
        /// The position where evaluation failed.
        x: [f64; 2],

        /// The phase of the failed evaluation.
        phase: Phase,

        /// The evaluation error.
        error: &'a EvalError<O::Error>,
    },
}

impl<O> Event<'_, O>
where
    O: Objective<2>,
{
    /// Returns the position that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> [f64; 2] {
        match self {
            Self::Sampled { point } | Self::Refined { point, .. } => point.x,
            Self::Failed { x, .. } => *x,
        }
    }

    /// Returns the phase of the evaluation.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Sampled { .. } => Phase::Sampling,
            Self::Refined { seed, .. } => Phase::Refinement { seed: *seed },
            Self::Failed { phase, .. } => *phase,
        }
    }
}
