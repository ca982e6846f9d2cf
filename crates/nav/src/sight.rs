use std::str::FromStr;

use uom::si::f64::Angle;

use crate::{
    angle::{ParseError, parse_degrees},
    projection::Position,
};

/// A single celestial sight reduced to its circle of equal altitude.
///
/// `position` is the body's geographic position and `zenith_distance` the
/// circle's angular radius (90° minus the observed altitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sight {
    pub position: Position,
    pub zenith_distance: Angle,
}

impl Sight {
    #[must_use]
    pub fn new(position: Position, zenith_distance: Angle) -> Self {
        Self {
            position,
            zenith_distance,
        }
    }
}

/// Parses `latitude, longitude, zenith distance[, label[, color]]`.
///
/// Each angle uses the notation accepted by [`parse_degrees`]. Trailing fields
/// are ignored.
impl FromStr for Sight {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [latitude, longitude, zenith_distance, ..] = fields.as_slice() else {
            return Err(ParseError::MissingFields(fields.len()));
        };

        Ok(Self {
            position: Position {
                latitude: parse_degrees(latitude)?,
                longitude: parse_degrees(longitude)?,
            },
            zenith_distance: parse_degrees(zenith_distance)?,
        })
    }
}

/// Parses one sight per line.
///
/// Blank lines and lines with fewer than three comma-separated fields are
/// skipped, so notes can be kept alongside the sights.
///
/// # Errors
///
/// Returns [`ParseError::Line`] with the 1-based line number if an angle on a
/// sight line cannot be parsed.
pub fn parse_sights(text: &str) -> Result<Vec<Sight>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| line.split(',').count() >= 3)
        .map(|(index, line)| {
            line.parse::<Sight>().map_err(|source| ParseError::Line {
                line: index + 1,
                source: Box::new(source),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::angle::degree;

    #[test]
    fn parses_a_sight_line() {
        let sight: Sight = "26°02'52\"N, 50°58'18\"W, 51.6192°, Sun, #f80"
            .parse()
            .unwrap();

        assert_relative_eq!(
            sight.position.latitude.get::<degree>(),
            26.047_777_777_777_78,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            sight.position.longitude.get::<degree>(),
            -50.971_666_666_666_67,
            epsilon = 1e-12
        );
        assert_relative_eq!(sight.zenith_distance.get::<degree>(), 51.6192, epsilon = 1e-12);
    }

    #[test]
    fn short_line_is_missing_fields() {
        assert_eq!("10, 20".parse::<Sight>(), Err(ParseError::MissingFields(2)));
    }

    #[test]
    fn skips_blank_and_short_lines() {
        let text = "
            Sights taken 2024-03-01
            26°02'52\"N, 50°58'18\"W, 51.6192°

            7°24'40\"N, 105°00'51\"W, 59.0633°
        ";

        let sights = parse_sights(text).unwrap();

        assert_eq!(sights.len(), 2);
        assert_relative_eq!(
            sights[1].zenith_distance.get::<degree>(),
            59.0633,
            epsilon = 1e-12
        );
    }

    #[test]
    fn reports_the_failing_line() {
        let error = parse_sights("10, 20, 30\n10, 20, N\n").unwrap_err();

        assert_eq!(
            error,
            ParseError::Line {
                line: 2,
                source: Box::new(ParseError::Empty("N".into())),
            }
        );
    }
}
