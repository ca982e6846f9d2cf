use log::debug;
use sightfix_core::Observer;
use sightfix_solvers::optimization::clustered::{self, Action, Config, Event};
use thiserror::Error;
use uom::si::angle::degree;

use crate::{projection::Position, sight::Sight, surface::ErrorSurface};

/// A candidate position for the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub position: Position,

    /// Sum of squared circle offsets at the fix, in plane units.
    ///
    /// Near zero when every circle passes through the fix.
    pub residual: f64,
}

/// Errors that can occur while reducing sights to a fix.
#[derive(Debug, Error)]
pub enum FixError {
    #[error("no sights to reduce")]
    NoSights,

    #[error("position search failed")]
    Search(#[from] clustered::Error),
}

/// Reduces a set of sights to the most likely observer positions.
///
/// With one or two sights the circles usually cross twice, so two fixes are
/// returned; with three or more the single best fix is returned. Fixes are
/// sorted by latitude, northernmost first.
///
/// # Errors
///
/// Returns [`FixError::NoSights`] for an empty slice, or [`FixError::Search`]
/// if the minimum search fails.
pub fn fix(sights: &[Sight], config: &Config) -> Result<Vec<Fix>, FixError> {
    fix_observed(sights, config, ())
}

/// Like [`fix`], forwarding every search event to `observer`.
///
/// # Errors
///
/// Returns the same errors as [`fix`].
pub fn fix_observed<Obs>(
    sights: &[Sight],
    config: &Config,
    observer: Obs,
) -> Result<Vec<Fix>, FixError>
where
    Obs: for<'a> Observer<Event<'a, ErrorSurface>, Action>,
{
    if sights.is_empty() {
        return Err(FixError::NoSights);
    }

    let surface = ErrorSurface::from_sights(sights);
    let count = if sights.len() > 2 { 1 } else { 2 };
    let solution = clustered::search(&surface, count, config, observer)?;

    if solution.collapsed {
        debug!(
            "{} sight(s) resolved to a single basin; reporting it {count} times",
            sights.len()
        );
    }

    let mut fixes: Vec<Fix> = solution
        .minima
        .iter()
        .map(|minimum| Fix {
            position: Position::unproject(minimum.point.x),
            residual: minimum.point.objective,
        })
        .collect();
    fixes.sort_by(|a, b| {
        let a = a.position.latitude.get::<degree>();
        let b = b.position.latitude.get::<degree>();
        b.total_cmp(&a)
    });

    Ok(fixes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::f64::Angle;

    #[test]
    fn empty_input_has_no_fix() {
        assert!(matches!(
            fix(&[], &Config::default()),
            Err(FixError::NoSights)
        ));
    }

    #[test]
    fn single_sight_reports_two_points_on_its_circle() {
        let sight = Sight::new(
            Position::from_degrees(30.0, 0.0),
            Angle::new::<degree>(20.0),
        );

        let fixes = fix(&[sight], &Config::default()).unwrap();

        assert_eq!(fixes.len(), 2);
        for fix in &fixes {
            assert!(fix.residual < 1e-20);
        }
        assert!(fixes[0].position.latitude >= fixes[1].position.latitude);
    }

    #[test]
    fn observer_can_stop_the_reduction() {
        let sights = [
            Sight::new(Position::from_degrees(10.0, 0.0), Angle::new::<degree>(30.0)),
            Sight::new(Position::from_degrees(0.0, 30.0), Angle::new::<degree>(30.0)),
        ];
        let mut evals = 0;

        let fixes = fix_observed(&sights, &Config::default(), |_: &Event<'_, ErrorSurface>| {
            evals += 1;
            (evals == 10).then_some(Action::StopEarly)
        })
        .unwrap();

        assert_eq!(evals, 10);
        // Sampling starts at the south pole, so only far-southern seeds exist yet.
        assert_eq!(fixes.len(), 2);
        for fix in &fixes {
            assert!(fix.position.latitude.get::<degree>() < -85.0);
        }
    }
}
