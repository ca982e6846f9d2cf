//! Parsing of sextant-style angle notation.
//!
//! Angles are written as degrees with optional minutes and seconds, using any
//! punctuation as separators: `26°02'52"N`, `50 58 18 W`, `-7.5`, `S12 30`.

use thiserror::Error;
use uom::si::{angle::degree, f64::Angle};

/// Errors that can occur while parsing angles and sights.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no angle found in {0:?}")]
    Empty(String),

    #[error("invalid field {field:?} in angle {text:?}")]
    Field { text: String, field: String },

    #[error("expected latitude, longitude and zenith distance, got {0} field(s)")]
    MissingFields(usize),

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

/// Parses an angle written in degrees, minutes and seconds.
///
/// Every character other than a digit, `+`, `-`, `.`, `S` or `W` separates
/// fields, so degree, minute and second marks as well as `N` and `E` can be
/// written freely. The fields are degrees, minutes, seconds and so on, each
/// worth a sixtieth of the previous one.
///
/// The result is negative when the text starts with `-`, or when it starts or
/// ends with `S` or `W`. Both together cancel out.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] if no fields remain, or
/// [`ParseError::Field`] if a field is not a number.
pub fn parse_degrees(text: &str) -> Result<Angle, ParseError> {
    let cleaned: String = text
        .chars()
        .map(|c| if is_angle_char(c) { c } else { ' ' })
        .collect();
    let mut rest = cleaned.trim();

    let mut negative = rest.starts_with('-');
    if let Some(stripped) = rest.strip_prefix(['-', '+']) {
        rest = stripped.trim_start();
    }

    let mut hemisphere = false;
    if let Some(stripped) = rest.strip_prefix(is_south_or_west) {
        rest = stripped;
        hemisphere = true;
    }
    if let Some(stripped) = rest.strip_suffix(is_south_or_west) {
        rest = stripped;
        hemisphere = true;
    }
    if hemisphere {
        negative = !negative;
    }

    let fields: Vec<&str> = rest.split_whitespace().collect();
    if fields.is_empty() {
        return Err(ParseError::Empty(text.to_owned()));
    }

    let mut degrees = 0.0;
    let mut scale = 1.0;
    for field in fields {
        let value: f64 = field.parse().map_err(|_| ParseError::Field {
            text: text.to_owned(),
            field: field.to_owned(),
        })?;
        degrees += value * scale;
        scale /= 60.0;
    }

    Ok(Angle::new::<degree>(if negative { -degrees } else { degrees }))
}

fn is_angle_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.') || is_south_or_west(c)
}

fn is_south_or_west(c: char) -> bool {
    matches!(c, 's' | 'S' | 'w' | 'W')
}
