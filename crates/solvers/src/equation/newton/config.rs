use newrap_core::{MAX_IT, TOL};
use thiserror::Error;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: MAX_IT,
            residual_tol: TOL,
        }
    }
}

impl Config {
    /// Creates a new config with a validated iteration cap and tolerance.
    ///
    /// The solver always takes at least one step, so a cap of zero is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `residual_tol` is negative
    /// or non-finite.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
        })
    }

    /// Returns the maximum number of Newton iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance on the summed absolute residual.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_uses_reference_constants() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 100);
        assert_relative_eq!(config.residual_tol(), 1e-12);
        assert_eq!(Config::new(MAX_IT, TOL), Ok(config));
    }

    #[test]
    fn rejects_zero_iterations() {
        assert_eq!(Config::new(0, TOL), Err(ConfigError::MaxIters));
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(10, -1e-9), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::ResidualTol));
    }

    #[test]
    fn zero_tolerance_is_allowed() {
        let config = Config::new(5, 0.0).expect("valid config");
        assert_relative_eq!(config.residual_tol(), 0.0);
    }
}
