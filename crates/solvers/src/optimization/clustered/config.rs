use thiserror::Error;

/// Largest accepted `grid_steps`.
///
/// The grid stores `(2 · grid_steps + 1)²` nodes, about 4.2 million here.
pub const MAX_GRID_STEPS: usize = 1024;

/// Configuration for the clustered search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    grid_steps: usize,
    cluster_radius: f64,
    max_iters: usize,
    x_abs_tol: f64,
    objective_tol: f64,
    duplicate_tol: f64,
}

/// Errors that can occur when validating a clustered search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid_steps must be between 1 and 1024")]
    GridSteps,

    #[error("cluster_radius must be finite and at least 1")]
    ClusterRadius,

    #[error("x_abs_tol must be finite and positive")]
    XAbs,

    #[error("objective_tol must be finite and non-negative")]
    ObjectiveTol,

    #[error("duplicate_tol must be finite and non-negative")]
    DuplicateTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(90, 1.5, 500, 1e-12, 0.0, 1e-9).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// - `grid_steps`: grid nodes per unit length; the grid spacing is
    ///   `1 / grid_steps`.
    /// - `cluster_radius`: merge distance between local-minimum candidates,
    ///   in grid spacings.
    /// - `max_iters`: refinement iteration cap per seed.
    /// - `x_abs_tol`: refinement stops once the simplex is this small.
    /// - `objective_tol`: refinement stops once the simplex vertex values span
    ///   no more than this; zero disables the check.
    /// - `duplicate_tol`: two minima closer than this are reported as collapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range or non-finite.
    pub fn new(
        grid_steps: usize,
        cluster_radius: f64,
        max_iters: usize,
        x_abs_tol: f64,
        objective_tol: f64,
        duplicate_tol: f64,
    ) -> Result<Self, ConfigError> {
        check_grid_steps(grid_steps)?;
        if !cluster_radius.is_finite() || cluster_radius < 1.0 {
            return Err(ConfigError::ClusterRadius);
        }
        if !x_abs_tol.is_finite() || x_abs_tol <= 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !objective_tol.is_finite() || objective_tol < 0.0 {
            return Err(ConfigError::ObjectiveTol);
        }
        if !duplicate_tol.is_finite() || duplicate_tol < 0.0 {
            return Err(ConfigError::DuplicateTol);
        }

        Ok(Self {
            grid_steps,
            cluster_radius,
            max_iters,
            x_abs_tol,
            objective_tol,
            duplicate_tol,
        })
    }

    /// Returns a copy of this config with a different grid resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if `grid_steps` is zero or above [`MAX_GRID_STEPS`].
    pub fn with_grid_steps(self, grid_steps: usize) -> Result<Self, ConfigError> {
        check_grid_steps(grid_steps)?;
        Ok(Self { grid_steps, ..self })
    }

    /// Returns a copy of this config with a different refinement iteration cap.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the number of grid nodes per unit length.
    #[must_use]
    pub fn grid_steps(&self) -> usize {
        self.grid_steps
    }

    /// Returns the grid spacing, `1 / grid_steps`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn spacing(&self) -> f64 {
        1.0 / self.grid_steps as f64
    }

    /// Returns the cluster merge distance in grid spacings.
    #[must_use]
    pub fn cluster_radius(&self) -> f64 {
        self.cluster_radius
    }

    /// Returns the maximum number of refinement iterations per seed.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the simplex size at which refinement has converged.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the spread of simplex values at or below which refinement has converged.
    #[must_use]
    pub fn objective_tol(&self) -> f64 {
        self.objective_tol
    }

    /// Returns the distance below which two minima count as one.
    #[must_use]
    pub fn duplicate_tol(&self) -> f64 {
        self.duplicate_tol
    }
}

fn check_grid_steps(grid_steps: usize) -> Result<(), ConfigError> {
    if (1..=MAX_GRID_STEPS).contains(&grid_steps) {
        Ok(())
    } else {
        Err(ConfigError::GridSteps)
    }
}
