use super::{Point, grid::Grid};

/// A group of neighbouring local-minimum candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Cluster {
    /// Lowest-objective candidate of the cluster.
    pub(super) seed: Point,

    /// Grid index of the seed, used to break objective ties by scan order.
    pub(super) index: usize,

    /// Number of candidates merged into the cluster.
    pub(super) size: usize,
}

/// Groups the grid's local minima into clusters ranked by seed objective.
///
/// A node is a candidate when no evaluated 8-neighbour is strictly lower.
/// Candidates within `radius` grid spacings of each other join the same
/// cluster, transitively.
pub(super) fn find_clusters(grid: &Grid, radius: f64) -> Vec<Cluster> {
    let candidates: Vec<bool> = (0..grid.len())
        .map(|index| is_local_minimum(grid, index))
        .collect();
    let offsets = merge_offsets(radius);

    let mut visited = vec![false; grid.len()];
    let mut clusters = Vec::new();
    let mut stack = Vec::new();

    for start in 0..grid.len() {
        if !candidates[start] || visited[start] {
            continue;
        }

        visited[start] = true;
        stack.push(start);
        let mut best = start;
        let mut size = 0;

        while let Some(index) = stack.pop() {
            size += 1;
            if is_better(grid, index, best) {
                best = index;
            }
            for &(di, dj) in &offsets {
                let Some(next) = grid.neighbor(index, di, dj) else {
                    continue;
                };
                if candidates[next] && !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }

        if let Some(seed) = grid.point(best) {
            clusters.push(Cluster {
                seed,
                index: best,
                size,
            });
        }
    }

    clusters.sort_by(|a, b| {
        a.seed
            .objective
            .total_cmp(&b.seed.objective)
            .then(a.index.cmp(&b.index))
    });
    clusters
}

fn is_local_minimum(grid: &Grid, index: usize) -> bool {
    let Some(value) = grid.value(index) else {
        return false;
    };

    NEIGHBORS.iter().all(|&(di, dj)| {
        grid.neighbor(index, di, dj)
            .and_then(|next| grid.value(next))
            .is_none_or(|other| value <= other)
    })
}

/// Returns true if node `a` beats node `b` by objective, then by scan order.
fn is_better(grid: &Grid, a: usize, b: usize) -> bool {
    match (grid.value(a), grid.value(b)) {
        (Some(va), Some(vb)) => va < vb || (va == vb && a < b),
        (Some(_), None) => true,
        _ => false,
    }
}

const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Cell offsets within `radius` grid spacings, excluding the origin.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn merge_offsets(radius: f64) -> Vec<(isize, isize)> {
    let reach = radius.floor() as isize;
    let mut offsets = Vec::new();
    for dj in -reach..=reach {
        for di in -reach..=reach {
            if (di, dj) != (0, 0) && ((di * di + dj * dj) as f64) <= radius * radius {
                offsets.push((di, dj));
            }
        }
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fills every in-disk node with `f(position)`.
    fn filled(steps: usize, f: impl Fn([f64; 2]) -> f64) -> Grid {
        let mut grid = Grid::new(steps);
        let nodes: Vec<usize> = grid.nodes().collect();
        for index in nodes {
            let value = f(grid.position(index));
            grid.set(index, value);
        }
        grid
    }

    #[test]
    fn merge_offsets_include_diagonals() {
        assert_eq!(merge_offsets(1.0).len(), 4);
        assert_eq!(merge_offsets(1.5).len(), 8);
        assert_eq!(merge_offsets(2.0).len(), 12);
    }

    #[test]
    fn single_bowl_gives_one_cluster() {
        let grid = filled(20, |[x, y]| (x - 0.3).powi(2) + (y + 0.1).powi(2));

        let clusters = find_clusters(&grid, 1.5);

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].size, 1);
        assert!((clusters[0].seed.x[0] - 0.3).abs() < 1e-12);
        assert!((clusters[0].seed.x[1] + 0.1).abs() < 1e-12);
    }

    #[test]
    fn separated_bowls_are_ranked_by_objective() {
        let grid = filled(20, |[x, y]| {
            let left = (x + 0.5).powi(2) + y * y + 0.25;
            let right = (x - 0.5).powi(2) + y * y;
            left.min(right)
        });

        let clusters = find_clusters(&grid, 1.5);

        assert_eq!(clusters.len(), 2);
        assert!(clusters[0].seed.x[0] > 0.0);
        assert!(clusters[1].seed.x[0] < 0.0);
        assert!(clusters[0].seed.objective < clusters[1].seed.objective);
    }

    #[test]
    fn plateau_merges_into_one_cluster_seeded_in_scan_order() {
        let grid = filled(5, |_| 1.0);

        let clusters = find_clusters(&grid, 1.5);

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].size, grid.nodes().count());
        assert_eq!(clusters[0].index, grid.nodes().next().unwrap());
        assert_eq!(clusters[0].seed.x, [0.0, -1.0]);
    }

    #[test]
    fn empty_grid_has_no_clusters() {
        let grid = Grid::new(5);

        assert!(find_clusters(&grid, 1.5).is_empty());
    }
}
