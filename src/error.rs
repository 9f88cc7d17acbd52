//! Error types for U-Ordering.

use thiserror::Error;

/// Result type alias for U-Ordering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating an optimizer invocation.
///
/// All variants are detected before any search work begins; a running
/// search itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument violates an operation's precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
