use super::Point;

/// Square sampling grid covering the unit disk.
///
/// Nodes are stored row-major with `side = 2 * steps + 1` columns. The node in
/// column `c` and row `r` has integer offsets `(i, j) = (c - steps, r - steps)`
/// and sits at `(i / steps, j / steps)`. It belongs to the disk when
/// `i² + j² ≤ steps²`, which keeps membership exact.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    steps: usize,
    values: Vec<Option<f64>>,
}

#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
impl Grid {
    /// Creates a grid with `steps` nodes per unit length and no values.
    pub(super) fn new(steps: usize) -> Self {
        let side = 2 * steps + 1;
        Self {
            steps,
            values: vec![None; side * side],
        }
    }

    pub(super) fn side(&self) -> usize {
        2 * self.steps + 1
    }

    pub(super) fn len(&self) -> usize {
        self.values.len()
    }

    fn offsets(&self, index: usize) -> (isize, isize) {
        let side = self.side();
        let steps = self.steps as isize;
        ((index % side) as isize - steps, (index / side) as isize - steps)
    }

    /// Returns true if the node lies in the closed unit disk.
    pub(super) fn contains(&self, index: usize) -> bool {
        let (i, j) = self.offsets(index);
        let steps = self.steps as isize;
        i * i + j * j <= steps * steps
    }

    pub(super) fn position(&self, index: usize) -> [f64; 2] {
        let (i, j) = self.offsets(index);
        let steps = self.steps as f64;
        [i as f64 / steps, j as f64 / steps]
    }

    /// Iterates over the indices of all in-disk nodes in scan order.
    pub(super) fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&index| self.contains(index))
    }

    pub(super) fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    pub(super) fn set(&mut self, index: usize, value: f64) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = Some(value);
        }
    }

    /// Returns the evaluated point at `index`, if any.
    pub(super) fn point(&self, index: usize) -> Option<Point> {
        self.value(index)
            .map(|value| Point::new(self.position(index), value))
    }

    /// Returns the index of the node offset by `(di, dj)` cells, if it is on the grid.
    pub(super) fn neighbor(&self, index: usize, di: isize, dj: isize) -> Option<usize> {
        let side = self.side() as isize;
        let col = (index as isize % side) + di;
        let row = (index as isize / side) + dj;
        if (0..side).contains(&col) && (0..side).contains(&row) {
            Some((row * side + col) as usize)
        } else {
            None
        }
    }
}
