use std::convert::Infallible;

use sightfix_core::Objective;

use crate::{projection::plane_distance, sight::Sight};

/// A projected circle of equal altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reference {
    /// The body's geographic position on the projection plane.
    pub center: [f64; 2],

    /// The circle's radius on the projection plane.
    pub distance: f64,
}

impl Reference {
    #[must_use]
    pub fn new(center: [f64; 2], distance: f64) -> Self {
        Self { center, distance }
    }

    /// Projects a sight onto the plane.
    #[must_use]
    pub fn from_sight(sight: &Sight) -> Self {
        Self {
            center: sight.position.project(),
            distance: plane_distance(sight.zenith_distance),
        }
    }

    /// Returns how far `x` lies off this circle.
    fn offset(&self, x: &[f64; 2]) -> f64 {
        (x[0] - self.center[0]).hypot(x[1] - self.center[1]) - self.distance
    }
}

/// The sum of squared circle offsets over a set of references.
///
/// Zero exactly where every circle passes, so its minima are the candidate
/// fixes. A surface without references is zero everywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorSurface {
    references: Vec<Reference>,
}

impl ErrorSurface {
    #[must_use]
    pub fn new(references: Vec<Reference>) -> Self {
        Self { references }
    }

    /// Builds the surface for a set of sights.
    #[must_use]
    pub fn from_sights(sights: &[Sight]) -> Self {
        sights.iter().map(Reference::from_sight).collect()
    }

    #[must_use]
    pub fn references(&self) -> &[Reference] {
        &self.references
    }
}

impl FromIterator<Reference> for ErrorSurface {
    fn from_iter<I: IntoIterator<Item = Reference>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Objective<2> for ErrorSurface {
    type Error = Infallible;

    fn evaluate(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(self
            .references
            .iter()
            .map(|reference| reference.offset(x).powi(2))
            .sum())
    }
}
