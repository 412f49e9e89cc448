use thiserror::Error;

/// Configuration shared by the interval search methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
    perturbation: Option<f64>,
}

/// Errors that can occur when validating an interval search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("perturbation must be finite and positive")]
    Perturbation,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-3).unwrap()
    }
}

impl Config {
    /// Creates a config that stops once the bracket is at most `epsilon` wide.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-finite or not positive.
    pub fn new(epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self {
            epsilon,
            max_iters: 1000,
            perturbation: None,
        })
    }

    /// Sets the iteration cap for the half-interval and golden-ratio methods.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self { max_iters, ..self })
    }

    /// Sets the distinguishability constant used by the final Fibonacci split.
    ///
    /// # Errors
    ///
    /// Returns an error if `perturbation` is non-finite or not positive.
    pub fn with_perturbation(self, perturbation: f64) -> Result<Self, ConfigError> {
        if !perturbation.is_finite() || perturbation <= 0.0 {
            return Err(ConfigError::Perturbation);
        }
        Ok(Self {
            perturbation: Some(perturbation),
            ..self
        })
    }

    /// Returns the target bracket width.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of bracket reductions.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the Fibonacci perturbation, which defaults to `epsilon`.
    #[must_use]
    pub fn perturbation(&self) -> f64 {
        self.perturbation.unwrap_or(self.epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn validates_knobs() {
        assert_eq!(Config::new(0.0), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(f64::NAN), Err(ConfigError::Epsilon));

        let config = Config::new(0.2).unwrap();
        assert_eq!(config.with_max_iters(0), Err(ConfigError::MaxIters));
        assert_eq!(
            config.with_perturbation(-1.0),
            Err(ConfigError::Perturbation)
        );
    }

    #[test]
    fn perturbation_defaults_to_epsilon() {
        let config = Config::new(0.3).unwrap();
        assert_relative_eq!(config.perturbation(), 0.3);

        let config = config.with_perturbation(0.01).unwrap();
        assert_relative_eq!(config.perturbation(), 0.01);
        assert_relative_eq!(config.epsilon(), 0.3);
    }
}
