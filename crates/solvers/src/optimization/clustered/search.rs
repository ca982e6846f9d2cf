use log::{debug, trace};
use sightfix_core::{Objective, Observer};

use crate::optimization::evaluate::evaluate;

use super::{
    Action, Config, Error, Event, Minimum, Phase, Point, Solution, Status,
    cluster::find_clusters,
    grid::Grid,
    refine::{Outcome, Seed, refine},
};

/// Core clustered search implementation.
pub(super) fn run<O, Obs>(
    objective: &O,
    count: usize,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective<2>,
    Obs: for<'a> Observer<Event<'a, O>, Action>,
{
    if !(1..=2).contains(&count) {
        return Err(Error::InvalidCount(count));
    }

    let sampling = sample(objective, config, &mut observer)?;
    let clusters = find_clusters(&sampling.grid, config.cluster_radius());
    debug!(
        "sampled {} grid nodes ({} kept), found {} clusters",
        sampling.evals,
        sampling.kept,
        clusters.len()
    );
    if clusters.is_empty() {
        return Err(Error::NoSolution);
    }

    let mut evals = sampling.evals;
    let mut stopped = sampling.stopped;
    let mut merged = 0;
    let mut minima: Vec<Minimum> = Vec::with_capacity(count);

    // Seeds are refined in rank order until enough distinct basins are found.
    for (rank, cluster) in clusters.iter().enumerate() {
        if minima.len() == count {
            break;
        }
        trace!(
            "seed {rank} at {:?} (objective {:e}) merges {} candidate(s)",
            cluster.seed.x,
            cluster.seed.objective,
            cluster.size
        );
        if stopped {
            minima.push(Minimum {
                point: cluster.seed,
                status: Status::StoppedByObserver,
                iters: 0,
            });
            continue;
        }

        let seed = Seed {
            rank,
            point: cluster.seed,
            accepted: &minima,
        };
        let refinement = refine(objective, seed, config, &mut observer)?;
        evals += refinement.evals;
        match refinement.outcome {
            Outcome::Found(minimum) => {
                stopped = minimum.status == Status::StoppedByObserver;
                minima.push(minimum);
            }
            Outcome::Captured => merged += 1,
        }
    }
    if merged > 0 {
        debug!("{merged} seed(s) merged into basins already found");
    }

    let mut collapsed = false;
    if minima.len() < count {
        if let Some(&best) = minima.first() {
            minima.push(best);
        }
        collapsed = true;
    }

    minima.sort_by(|a, b| a.point.objective.total_cmp(&b.point.objective));

    collapsed |= matches!(
        minima.as_slice(),
        [first, second] if first.point.distance(&second.point) <= config.duplicate_tol()
    );
    if collapsed {
        debug!("requested {count} distinct minima but found fewer; repeating the best");
    }

    Ok(Solution {
        minima,
        clusters: clusters.len(),
        evals,
        collapsed,
        merged,
    })
}

/// Evaluated grid and bookkeeping from the sampling phase.
struct Sampling {
    grid: Grid,
    evals: usize,
    kept: usize,
    stopped: bool,
}

/// Evaluates the objective at every in-disk grid node, in scan order.
fn sample<O, Obs>(objective: &O, config: &Config, observer: &mut Obs) -> Result<Sampling, Error>
where
    O: Objective<2>,
    Obs: for<'a> Observer<Event<'a, O>, Action>,
{
    let mut grid = Grid::new(config.grid_steps());
    let nodes: Vec<usize> = grid.nodes().collect();
    let mut evals = 0;
    let mut kept = 0;

    for index in nodes {
        let x = grid.position(index);
        evals += 1;

        let action = match evaluate(objective, &x) {
            Ok(value) => {
                let event: Event<'_, O> = Event::Sampled {
                    point: Point::new(x, value),
                };
                let action = observer.observe(&event);
                if action != Some(Action::Reject) {
                    grid.set(index, value);
                    kept += 1;
                }
                action
            }
            Err(error) => {
                let event: Event<'_, O> = Event::Failed {
                    x,
                    phase: Phase::Sampling,
                    error: &error,
                };
                let action = observer.observe(&event);
                if action.is_none() {
                    return Err(Error::from_eval(x, error));
                }
                action
            }
        };

        if action == Some(Action::StopEarly) {
            return Ok(Sampling {
                grid,
                evals,
                kept,
                stopped: true,
            });
        }
    }

    Ok(Sampling {
        grid,
        evals,
        kept,
        stopped: false,
    })
}
