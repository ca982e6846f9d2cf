//! Clustered grid search for the best local minima of a 2-D objective.
//!
//! # Algorithm
//!
//! The search runs in three phases over the closed unit disk:
//!
//! 1. **Sampling**: The objective is evaluated on a square grid of spacing
//!    `1 / grid_steps`. Only nodes inside the disk are evaluated.
//! 2. **Clustering**: Grid nodes that are no worse than any of their eight
//!    neighbours are local-minimum candidates. Candidates within
//!    `cluster_radius` grid cells of each other are merged into one cluster,
//!    represented by its lowest-objective node (the seed). Clusters are ranked
//!    by seed objective.
//! 3. **Refinement**: Seeds are polished in rank order with a Nelder–Mead
//!    simplex that starts one grid spacing wide and may expand, contract, or
//!    shrink. Points outside the disk count as `+∞`, so the simplex never
//!    leaves it. A seed whose best vertex comes within one grid spacing of an
//!    accepted minimum has found that minimum's basin again; it is merged
//!    (see [`Solution::merged`]) and the next seed is tried. Refinement stops
//!    once `count` distinct minima are accepted.
//!
//! A long or curved valley is often split into several clusters by the grid.
//! Their seeds all descend to the same floor, so merging by destination keeps
//! one minimum per basin. The returned minima are sorted by objective, best
//! first.
//!
//! # When to Use
//!
//! The search is appropriate when:
//! - The objective is cheap, deterministic, and defined on the unit disk
//! - It may have several local minima, including exact ties
//! - The caller wants the one or two best basins, not every stationary point
//!
//! # Degenerate Results
//!
//! When two minima are requested but every seed ends in the same basin, the
//! best minimum is reported twice and [`Solution::collapsed`] is set. The flag
//! is also set when both refined minima land within `duplicate_tol` of each
//! other. Neither case is an error.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per objective evaluation:
//!
//! - [`Event::Sampled`]: a grid node was evaluated
//! - [`Event::Refined`]: a refinement candidate was evaluated
//! - [`Event::Failed`]: the objective failed or returned a non-finite value
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::Reject`] to discard a point (useful for excluding regions or for
//! recovering from evaluation failures).

mod action;
mod cluster;
mod config;
mod error;
mod event;
mod grid;
mod point;
mod refine;
mod search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, MAX_GRID_STEPS};
pub use error::Error;
pub use event::{Event, Phase};
pub use point::Point;
pub use solution::{Minimum, Solution, Status};

use sightfix_core::{Objective, Observer};

/// Finds the best `count` local minima of the objective over the unit disk.
///
/// `count` must be 1 or 2. The observer receives an [`Event`] for each
/// evaluation; see the [module docs](self) for the actions it may return.
///
/// # Errors
///
/// Returns an error if `count` is not 1 or 2, if an evaluation fails or is
/// non-finite and the observer does not return [`Action::Reject`], or if no
/// grid sample survives.
pub fn search<O, Obs>(
    objective: &O,
    count: usize,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<2>,
    Obs: for<'a> Observer<Event<'a, O>, Action>,
{
    search::run(objective, count, config, observer)
}

/// Finds the best `count` local minima without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `count` is not 1 or 2, if an evaluation fails or is
/// non-finite, or if no grid sample survives.
pub fn search_unobserved<O>(objective: &O, count: usize, config: &Config) -> Result<Solution, Error>
where
    O: Objective<2>,
{
    search(objective, count, config, ())
}
