use super::Point;

/// The reason a refinement finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The simplex shrank within `x_abs_tol`, or its values agreed within
    /// `objective_tol`.
    Converged,

    /// The refinement iteration cap was reached.
    MaxIters,

    /// An observer stopped the search early.
    StoppedByObserver,
}

/// A refined local minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    /// Position and objective of the minimum.
    pub point: Point,

    /// Why refinement of this minimum stopped.
    pub status: Status,

    /// Number of refinement iterations performed.
    pub iters: usize,
}

/// The result of a clustered search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Minima sorted by objective, best first.
    ///
    /// Always holds exactly the requested number of entries.
    pub minima: Vec<Minimum>,

    /// Number of distinct clusters found by the coarse sampling.
    pub clusters: usize,

    /// Total number of objective evaluations.
    pub evals: usize,

    /// True when fewer distinct minima than requested were found and the
    /// best one is repeated.
    pub collapsed: bool,

    /// Number of seeds whose refinement ended in the basin of a minimum
    /// already accepted.
    ///
    /// Elongated basins often hold several grid clusters; all but the first
    /// are counted here instead of being reported as minima.
    pub merged: usize,
}

impl Solution {
    /// Returns the positions of the minima, best first.
    pub fn positions(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.minima.iter().map(|minimum| minimum.point.x)
    }

    /// Returns true if the search was stopped by an observer.
    #[must_use]
    pub fn stopped_early(&self) -> bool {
        self.minima
            .iter()
            .any(|minimum| minimum.status == Status::StoppedByObserver)
    }
}
