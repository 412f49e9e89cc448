use thiserror::Error;

use crate::newton;

/// Configuration shared by the penalty and barrier methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    r0: f64,
    factor: f64,
    inner: newton::Config,
    max_outer_iters: usize,
}

/// Errors that can occur when validating a penalty/barrier config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("initial coefficient must be finite and positive")]
    InitialCoefficient,

    #[error("coefficient factor must be finite and greater than 1")]
    Factor,

    #[error("inner_max_iters must be at least 1")]
    InnerMaxIters,

    #[error("max_outer_iters must be at least 1")]
    MaxOuterIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.05, 0.5, 10.0).unwrap()
    }
}

impl Config {
    /// Creates a config with tolerance `epsilon`, initial coefficient `r0`
    /// and coefficient factor `factor` (`C`).
    ///
    /// Each inner Newton solve is capped at 10 iterations and the outer loop
    /// at 100.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` or `r0` is non-finite or not positive,
    /// or if `factor` is not greater than 1.
    pub fn new(epsilon: f64, r0: f64, factor: f64) -> Result<Self, ConfigError> {
        let inner = newton::Config::new(epsilon, epsilon, 10).map_err(|_| ConfigError::Epsilon)?;
        if !r0.is_finite() || r0 <= 0.0 {
            return Err(ConfigError::InitialCoefficient);
        }
        if !factor.is_finite() || factor <= 1.0 {
            return Err(ConfigError::Factor);
        }

        Ok(Self {
            epsilon,
            r0,
            factor,
            inner,
            max_outer_iters: 100,
        })
    }

    /// Sets the iteration cap of each inner Newton solve.
    ///
    /// # Errors
    ///
    /// Returns an error if `inner_max_iters` is zero.
    pub fn with_inner_max_iters(self, inner_max_iters: usize) -> Result<Self, ConfigError> {
        let inner = newton::Config::new(self.epsilon, self.epsilon, inner_max_iters)
            .map_err(|_| ConfigError::InnerMaxIters)?;
        Ok(Self { inner, ..self })
    }

    /// Sets the outer iteration budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_outer_iters` is zero.
    pub fn with_max_outer_iters(self, max_outer_iters: usize) -> Result<Self, ConfigError> {
        if max_outer_iters == 0 {
            return Err(ConfigError::MaxOuterIters);
        }
        Ok(Self {
            max_outer_iters,
            ..self
        })
    }

    /// Returns the tolerance on the penalty or barrier term.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the initial coefficient.
    #[must_use]
    pub fn r0(&self) -> f64 {
        self.r0
    }

    /// Returns the coefficient factor.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Returns the inner iteration cap.
    #[must_use]
    pub fn inner_max_iters(&self) -> usize {
        self.inner.max_iters()
    }

    /// Returns the outer iteration budget.
    #[must_use]
    pub fn max_outer_iters(&self) -> usize {
        self.max_outer_iters
    }

    /// Returns the Newton config for inner solves, with `epsilon` as both
    /// tolerances.
    #[must_use]
    pub fn inner(&self) -> &newton::Config {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_knobs() {
        assert_eq!(Config::new(0.0, 0.5, 10.0), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(f64::NAN, 0.5, 10.0), Err(ConfigError::Epsilon));
        assert_eq!(
            Config::new(0.05, -0.5, 10.0),
            Err(ConfigError::InitialCoefficient)
        );
        assert_eq!(Config::new(0.05, 0.5, 1.0), Err(ConfigError::Factor));

        let config = Config::default();
        assert_eq!(
            config.with_inner_max_iters(0),
            Err(ConfigError::InnerMaxIters)
        );
        assert_eq!(
            config.with_max_outer_iters(0),
            Err(ConfigError::MaxOuterIters)
        );
    }

    #[test]
    fn inner_config_reuses_epsilon() {
        let config = Config::default().with_inner_max_iters(4).unwrap();
        let inner = config.inner();

        assert_eq!(inner.max_iters(), 4);
        assert_eq!(inner.epsilon1().to_bits(), config.epsilon().to_bits());
        assert_eq!(inner.epsilon2().to_bits(), config.epsilon().to_bits());
    }
}
