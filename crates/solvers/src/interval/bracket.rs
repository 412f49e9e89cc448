use thiserror::Error;

/// Errors that can occur when validating an interval's bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
}

/// An ordered, finite interval `[start, end]` known to contain a minimizer.
///
/// Each iteration replaces the bracket with a new, narrower one; brackets
/// are never shrunk in place.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bracket {
    start: f64,
    end: f64,
}

impl Bracket {
    /// Validates and orders the interval endpoints.
    ///
    /// Reversed endpoints are swapped.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError`] if an endpoint is non-finite or the interval
    /// has zero width.
    pub fn new(bounds: [f64; 2]) -> Result<Self, BracketError> {
        let [start, end] = bounds;

        if !start.is_finite() || !end.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if start == end {
            return Err(BracketError::ZeroWidth);
        }

        if start < end {
            Ok(Self { start, end })
        } else {
            Ok(Self {
                start: end,
                end: start,
            })
        }
    }

    /// Creates a bracket from endpoints already known to be ordered.
    pub(super) fn ordered(start: f64, end: f64) -> Self {
        debug_assert!(start <= end, "bracket endpoints out of order");
        Self { start, end }
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.start + self.end)
    }

    /// Returns the endpoints as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.start, self.end]
    }
}
