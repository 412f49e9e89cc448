use thiserror::Error;

/// A method name did not match any known solver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method {name:?}")]
pub struct ParseMethodError {
    name: String,
}

impl ParseMethodError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// Returns the name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
