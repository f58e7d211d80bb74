//! Error type shared by all components.

use thiserror::Error;

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Errors returned when a component is handed arguments that would only
/// produce degenerate output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// An argument was outside of its valid domain.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl DemoError {
    /// Create an [`InvalidArgument`][Self::InvalidArgument] error.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>)
        -> Self
    {
        Self::InvalidArgument { name, reason: reason.into() }
    }
}
