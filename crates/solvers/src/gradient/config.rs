use thiserror::Error;

/// Configuration shared by the gradient descent methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon1: f64,
    epsilon2: f64,
    max_iters: usize,
    step: f64,
    max_halvings: usize,
}

/// Errors that can occur when validating a gradient descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon1 must be finite and positive")]
    Epsilon1,

    #[error("epsilon2 must be finite and positive")]
    Epsilon2,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("step must be finite and positive")]
    Step,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-3, 1e-3, 100).unwrap()
    }
}

impl Config {
    /// Creates a gradient descent config.
    ///
    /// The search stops when the gradient norm drops below `epsilon1`, when
    /// two consecutive steps move less than `epsilon2`, or after `max_iters`
    /// steps. The base step defaults to `0.5` and the line search gives up
    /// after 64 halvings.
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
            step: 0.5,
            max_halvings: 64,
        })
    }

    /// Sets the base step length the constant-step method starts from.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is non-finite or not positive.
    pub fn with_step(self, step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }
        Ok(Self { step, ..self })
    }

    /// Sets how many times a line search may halve the step before failing.
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

    /// Returns the base step length.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the line search halving budget.
    #[must_use]
    pub fn max_halvings(&self) -> usize {
        self.max_halvings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn validates_knobs() {
        assert_eq!(Config::new(0.0, 0.1, 10), Err(ConfigError::Epsilon1));
        assert_eq!(Config::new(0.1, f64::NAN, 10), Err(ConfigError::Epsilon2));
        assert_eq!(Config::new(0.1, 0.1, 0), Err(ConfigError::MaxIters));

        let config = Config::new(0.15, 0.2, 10).unwrap();
        assert_eq!(config.with_step(-0.5), Err(ConfigError::Step));
        assert_eq!(config.with_step(f64::INFINITY), Err(ConfigError::Step));
    }

    #[test]
    fn defaults_for_optional_knobs() {
        let config = Config::new(0.15, 0.2, 10).unwrap();
        assert_relative_eq!(config.step(), 0.5);
        assert_eq!(config.max_halvings(), 64);

        let config = config.with_step(1.0).unwrap().with_max_halvings(3);
        assert_relative_eq!(config.step(), 1.0);
        assert_eq!(config.max_halvings(), 3);
    }
}
