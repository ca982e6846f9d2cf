use log::trace;
use sightfix_core::{Objective, Observer};

use crate::optimization::evaluate::evaluate;

use super::{
    Action, Config, Error, Event, Minimum, Phase, Point, Status,
    point::{distance, in_disk},
};

/// A seed handed to refinement, with the minima already accepted.
#[derive(Debug, Clone, Copy)]
pub(super) struct Seed<'a> {
    /// Rank of the seed's cluster.
    pub(super) rank: usize,

    pub(super) point: Point,

    /// Refinement stops once its best vertex comes within one grid spacing
    /// of any of these.
    pub(super) accepted: &'a [Minimum],
}

impl Seed<'_> {
    fn captured(&self, x: [f64; 2], radius: f64) -> bool {
        self.accepted
            .iter()
            .any(|minimum| distance(minimum.point.x, x) <= radius)
    }
}

/// How refinement of one seed ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Outcome {
    /// A new minimum.
    Found(Minimum),

    /// The seed descended into the basin of an accepted minimum.
    Captured,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct Refinement {
    pub(super) outcome: Outcome,
    pub(super) evals: usize,
}

/// Evaluates refinement candidates and routes them through the observer.
struct Evaluator<'a, O, Obs> {
    objective: &'a O,
    observer: &'a mut Obs,
    rank: usize,
    evals: usize,
}

impl<O, Obs> Evaluator<'_, O, Obs>
where
    O: Objective<2>,
    Obs: for<'a> Observer<Event<'a, O>, Action>,
{
    /// Returns the value at `x`, or `None` if the observer stops the search.
    ///
    /// Points outside the disk and rejected points count as `+∞`.
    fn value(&mut self, x: [f64; 2], best: Point, size: f64) -> Result<Option<f64>, Error> {
        if !in_disk(x) {
            return Ok(Some(f64::INFINITY));
        }

        self.evals += 1;
        match evaluate(self.objective, &x) {
            Ok(value) => {
                let event: Event<'_, O> = Event::Refined {
                    seed: self.rank,
                    point: Point::new(x, value),
                    best,
                    size,
                };
                Ok(match self.observer.observe(&event) {
                    Some(Action::StopEarly) => None,
                    Some(Action::Reject) => Some(f64::INFINITY),
                    None => Some(value),
                })
            }
            Err(error) => {
                let event: Event<'_, O> = Event::Failed {
                    x,
                    phase: Phase::Refinement { seed: self.rank },
                    error: &error,
                };
                match self.observer.observe(&event) {
                    Some(Action::StopEarly) => Ok(None),
                    Some(Action::Reject) => Ok(Some(f64::INFINITY)),
                    None => Err(Error::from_eval(x, error)),
                }
            }
        }
    }
}

/// Polishes a seed with a Nelder–Mead simplex confined to the unit disk.
///
/// The initial simplex spans one grid spacing along each axis. Converges
/// once the simplex has shrunk within `x_abs_tol` or, when `objective_tol`
/// is positive, once its vertex values agree within it.
pub(super) fn refine<O, Obs>(
    objective: &O,
    seed: Seed<'_>,
    config: &Config,
    observer: &mut Obs,
) -> Result<Refinement, Error>
where
    O: Objective<2>,
    Obs: for<'a> Observer<Event<'a, O>, Action>,
{
    let rank = seed.rank;
    let spacing = config.spacing();
    if seed.captured(seed.point.x, spacing) {
        trace!("seed {rank} starts inside an accepted basin");
        return Ok(Refinement {
            outcome: Outcome::Captured,
            evals: 0,
        });
    }

    let mut evaluator = Evaluator {
        objective,
        observer,
        rank,
        evals: 0,
    };

    let found = |best: Point, status: Status, iters: usize, evals: usize| -> Result<Refinement, Error> {
        trace!(
            "seed {rank} refined to {:?} (objective {:e}) after {iters} iterations: {status:?}",
            best.x,
            best.objective
        );
        Ok(Refinement {
            outcome: Outcome::Found(Minimum {
                point: best,
                status,
                iters,
            }),
            evals,
        })
    };
    let captured = |iters: usize, evals: usize| -> Result<Refinement, Error> {
        trace!("seed {rank} reached an accepted basin after {iters} iterations");
        Ok(Refinement {
            outcome: Outcome::Captured,
            evals,
        })
    };

    let mut simplex = [seed.point; 3];
    for (vertex, axis) in simplex[1..].iter_mut().zip([[spacing, 0.0], [0.0, spacing]]) {
        let x = initial_vertex(seed.point.x, axis);
        let Some(value) = evaluator.value(x, seed.point, spacing)? else {
            return found(seed.point, Status::StoppedByObserver, 0, evaluator.evals);
        };
        *vertex = Point::new(x, value);
    }

    for iter in 1..=config.max_iters() {
        order(&mut simplex);
        let [best, good, worst] = simplex;
        let size = distance(good.x, best.x).max(distance(worst.x, best.x));

        let flat = config.objective_tol() > 0.0
            && worst.objective - best.objective <= config.objective_tol();
        if size <= config.x_abs_tol() || flat {
            return found(best, Status::Converged, iter - 1, evaluator.evals);
        }
        if seed.captured(best.x, spacing) {
            return captured(iter - 1, evaluator.evals);
        }

        let stopped = |evals: usize| found(best, Status::StoppedByObserver, iter - 1, evals);
        let centroid = midpoint(best.x, good.x);

        let reflected = [
            2.0 * centroid[0] - worst.x[0],
            2.0 * centroid[1] - worst.x[1],
        ];
        let Some(fr) = evaluator.value(reflected, best, size)? else {
            return stopped(evaluator.evals);
        };

        if fr < best.objective {
            let expanded = [
                3.0 * centroid[0] - 2.0 * worst.x[0],
                3.0 * centroid[1] - 2.0 * worst.x[1],
            ];
            let Some(fe) = evaluator.value(expanded, best, size)? else {
                return stopped(evaluator.evals);
            };
            simplex[2] = if fe < fr {
                Point::new(expanded, fe)
            } else {
                Point::new(reflected, fr)
            };
            continue;
        }
        if fr < good.objective {
            simplex[2] = Point::new(reflected, fr);
            continue;
        }

        let outside = fr < worst.objective;
        let contracted = if outside {
            midpoint(centroid, reflected)
        } else {
            midpoint(centroid, worst.x)
        };
        let Some(fc) = evaluator.value(contracted, best, size)? else {
            return stopped(evaluator.evals);
        };
        if (outside && fc <= fr) || (!outside && fc < worst.objective) {
            simplex[2] = Point::new(contracted, fc);
            continue;
        }

        for vertex in &mut simplex[1..] {
            let x = midpoint(best.x, vertex.x);
            let Some(value) = evaluator.value(x, best, size)? else {
                return stopped(evaluator.evals);
            };
            *vertex = Point::new(x, value);
        }
    }

    order(&mut simplex);
    if seed.captured(simplex[0].x, spacing) {
        return captured(config.max_iters(), evaluator.evals);
    }
    found(simplex[0], Status::MaxIters, config.max_iters(), evaluator.evals)
}

/// Steps `axis` away from `origin`, flipping it if that leaves the disk.
///
/// A seed too close to the boundary for either direction gets the outward
/// vertex pulled back onto the unit circle.
fn initial_vertex(origin: [f64; 2], axis: [f64; 2]) -> [f64; 2] {
    let forward = [origin[0] + axis[0], origin[1] + axis[1]];
    if in_disk(forward) {
        return forward;
    }
    let backward = [origin[0] - axis[0], origin[1] - axis[1]];
    if in_disk(backward) {
        return backward;
    }
    let norm = forward[0].hypot(forward[1]);
    [forward[0] / norm, forward[1] / norm]
}

/// Sorts the vertices by objective, keeping the current order among ties.
fn order(simplex: &mut [Point; 3]) {
    simplex.sort_by(|a, b| a.objective.total_cmp(&b.objective));
}

fn midpoint(a: [f64; 2], b: [f64; 2]) -> [f64; 2] {
    [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0]
}
