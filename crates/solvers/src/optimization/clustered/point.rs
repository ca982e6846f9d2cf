/// A position in the plane with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The position.
    pub x: [f64; 2],

    /// The objective value at `x`.
    pub objective: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: [f64; 2], objective: f64) -> Self {
        Self { x, objective }
    }

    /// Returns the Euclidean distance between the positions of two points.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        distance(self.x, other.x)
    }

    /// Returns the distance of this point from the origin.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.x[0].hypot(self.x[1])
    }
}

pub(super) fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

/// Returns true if `x` lies in the closed unit disk.
pub(super) fn in_disk(x: [f64; 2]) -> bool {
    x[0] * x[0] + x[1] * x[1] <= 1.0
}
