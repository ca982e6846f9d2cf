use std::fmt;

use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};

/// A geographic position.
///
/// Latitude is positive north and longitude positive east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: Angle,
    pub longitude: Angle,
}

impl Position {
    /// Creates a position from latitude and longitude in degrees.
    #[must_use]
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Angle::new::<degree>(latitude),
            longitude: Angle::new::<degree>(longitude),
        }
    }

    /// Projects this position onto the north-polar azimuthal equidistant plane.
    ///
    /// The north pole maps to the origin and the south pole to the unit
    /// circle. Longitude 0° points along `+y` and 90° E along `+x`.
    #[must_use]
    pub fn project(&self) -> [f64; 2] {
        let r = (90.0 - self.latitude.get::<degree>()) / 180.0;
        let (sin, cos) = self.longitude.get::<radian>().sin_cos();
        [sin * r, cos * r]
    }

    /// Maps a plane point back to a position.
    ///
    /// The origin maps to the north pole with zero longitude. Longitude lies in
    /// `[-180°, 180°]` and is non-negative whenever `x` is.
    #[must_use]
    pub fn unproject(point: [f64; 2]) -> Self {
        let [x, y] = point;
        let len = x.hypot(y);
        if len == 0.0 {
            return Self::from_degrees(90.0, 0.0);
        }

        let azimuth = (y / len).clamp(-1.0, 1.0).acos();
        Self {
            latitude: Angle::new::<degree>(90.0 - 180.0 * len),
            longitude: Angle::new::<radian>(if x >= 0.0 { azimuth } else { -azimuth }),
        }
    }
}

/// Formats as `latitude, longitude` in degrees, rounded to five decimals
/// with trailing zeros dropped (`10.5, -71.49644`).
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            decimal(self.latitude.get::<degree>()),
            decimal(self.longitude.get::<degree>())
        )
    }
}

/// Rounds to five decimals and trims the trailing zeros.
fn decimal(value: f64) -> String {
    let fixed = format!("{value:.5}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Converts a great-circle angle to a distance on the projection plane.
#[must_use]
pub fn plane_distance(angle: Angle) -> f64 {
    angle.get::<degree>() / 180.0
}

/// Converts a plane distance back to a great-circle angle.
#[must_use]
pub fn arc(distance: f64) -> Angle {
    Angle::new::<degree>(distance * 180.0)
}

/// The projection plane scaled onto a square image of `size` pixels.
///
/// The unit disk fills the image, with the north pole at its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelProjection {
    size: f64,
}

impl PixelProjection {
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns the pixel coordinates of `position`.
    #[must_use]
    pub fn to_pixels(&self, position: &Position) -> [f64; 2] {
        let half = self.size / 2.0;
        let [x, y] = position.project();
        [half + x * half, half + y * half]
    }

    /// Returns the position under the pixel coordinates `pixel`.
    #[must_use]
    pub fn from_pixels(&self, pixel: [f64; 2]) -> Position {
        let half = self.size / 2.0;
        Position::unproject([(pixel[0] - half) / half, (pixel[1] - half) / half])
    }

    /// Returns the radius in pixels of a circle of equal altitude.
    #[must_use]
    pub fn radius(&self, zenith_distance: Angle) -> f64 {
        plane_distance(zenith_distance) * self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn assert_position(actual: Position, latitude: f64, longitude: f64) {
        assert_relative_eq!(actual.latitude.get::<degree>(), latitude, epsilon = 1e-9);
        assert_relative_eq!(actual.longitude.get::<degree>(), longitude, epsilon = 1e-9);
    }

    #[test]
    fn poles_and_equator() {
        let [x, y] = Position::from_degrees(90.0, 45.0).project();
        assert_relative_eq!(x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(y, 0.0, epsilon = 1e-15);

        let [x, y] = Position::from_degrees(0.0, 90.0).project();
        assert_relative_eq!(x, 0.5);
        assert_relative_eq!(y, 0.0, epsilon = 1e-15);

        let [x, y] = Position::from_degrees(-90.0, 180.0).project();
        assert_relative_eq!(x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(y, -1.0);
    }

    #[test]
    fn origin_unprojects_to_north_pole() {
        assert_position(Position::unproject([0.0, 0.0]), 90.0, 0.0);
    }

    #[test]
    fn unproject_inverts_project() {
        for (latitude, longitude) in [(40.0, -20.0), (-16.4, -71.5), (66.3, 99.9), (0.0, 0.0)] {
            let position = Position::from_degrees(latitude, longitude);
            assert_position(Position::unproject(position.project()), latitude, longitude);
        }
    }

    #[test]
    fn longitude_sign_follows_x() {
        assert_position(Position::unproject([0.0, -0.5]), 0.0, 180.0);
        assert_position(Position::unproject([-0.25, 0.0]), 45.0, -90.0);
    }

    #[test]
    fn display_drops_trailing_zeros() {
        assert_eq!(Position::from_degrees(10.5, -20.0).to_string(), "10.5, -20");
        assert_eq!(
            Position::from_degrees(66.346_273_874, -99.971_874_032).to_string(),
            "66.34627, -99.97187"
        );
        assert_eq!(Position::from_degrees(0.000_001, -0.000_001).to_string(), "0, 0");
        assert_eq!(Position::from_degrees(45.000_004, 120.25).to_string(), "45, 120.25");
    }

    #[test]
    fn angles_map_to_plane_distances() {
        assert_relative_eq!(plane_distance(Angle::new::<degree>(90.0)), 0.5);
        assert_relative_eq!(arc(0.25).get::<degree>(), 45.0);
    }

    #[test]
    fn pixel_projection_fills_the_image() {
        let pixels = PixelProjection::new(700.0);

        let [px, py] = pixels.to_pixels(&Position::from_degrees(90.0, 0.0));
        assert_relative_eq!(px, 350.0);
        assert_relative_eq!(py, 350.0);

        let [px, py] = pixels.to_pixels(&Position::from_degrees(0.0, 90.0));
        assert_relative_eq!(px, 525.0);
        assert_relative_eq!(py, 350.0, epsilon = 1e-12);

        assert_position(pixels.from_pixels([350.0, 175.0]), 0.0, 180.0);
        assert_relative_eq!(pixels.radius(Angle::new::<degree>(36.0)), 70.0, epsilon = 1e-12);
    }
}
