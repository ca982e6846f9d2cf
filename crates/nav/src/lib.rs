//! Celestial sight reduction on a polar azimuthal equidistant plane.
//!
//! Each sight is a circle of equal altitude: the set of places on Earth where a
//! body stands at the measured zenith distance. Projected onto the north-polar
//! azimuthal equidistant plane, every circle becomes a [`Reference`] point with
//! a target distance, and the observer's position minimizes the squared
//! distance error to all of them. [`fix()`] builds that [`ErrorSurface`], runs the
//! clustered minimum search from `sightfix-solvers`, and maps the minima back to
//! latitude and longitude.
//!
//! Two sights generally cross twice, so two fixes are reported; with three or
//! more sights only the best fix is kept.

pub mod angle;
mod fix;
mod projection;
mod sight;
mod surface;

pub use fix::{Fix, FixError, fix, fix_observed};
pub use projection::{PixelProjection, Position, arc, plane_distance};
pub use sight::{Sight, parse_sights};
pub use surface::{ErrorSurface, Reference};
