use thiserror::Error;

/// Configuration for Newton's method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon1: f64,
    epsilon2: f64,
    max_iters: usize,
    max_halvings: usize,
}

/// Errors that can occur when validating a Newton config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon1 must be finite and positive")]
    Epsilon1,

    #[error("epsilon2 must be finite and positive")]
    Epsilon2,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-3, 1e-3, 100).unwrap()
    }
}

impl Config {
    /// Creates a Newton config.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is non-finite or not positive, or if
    /// `max_iters` is zero.
    pub fn new(epsilon1: f64, epsilon2: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !epsilon1.is_finite() || epsilon1 <= 0.0 {
            return Err(ConfigError::Epsilon1);
        }
        if !epsilon2.is_finite() || epsilon2 <= 0.0 {
            return Err(ConfigError::Epsilon2);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            epsilon1,
            epsilon2,
            max_iters,
            max_halvings: 64,
        })
    }

    /// Sets how many times the fallback line search may halve below the
    /// smallest grid step.
    #[must_use]
    pub fn with_max_halvings(self, max_halvings: usize) -> Self {
        Self {
            max_halvings,
            ..self
        }
    }

    /// Returns the gradient norm tolerance.
    #[must_use]
    pub fn epsilon1(&self) -> f64 {
        self.epsilon1
    }

    /// Returns the stabilization tolerance.
    #[must_use]
    pub fn epsilon2(&self) -> f64 {
        self.epsilon2
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the line search halving budget.
    #[must_use]
    pub fn max_halvings(&self) -> usize {
        self.max_halvings
    }
}
