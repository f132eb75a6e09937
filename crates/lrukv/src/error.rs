//! Error types for lrukv

use std::collections::TryReserveError;
use std::fmt;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
///
/// A lookup miss is not an error; lookups return `Option`.
#[derive(Debug)]
pub enum Error {
    /// Capacity or config value the cache cannot be built with
    InvalidConfiguration(String),

    /// Argument outside an operation's contract
    InvalidArgument(&'static str),

    /// Memory for a bucket table, entry or node could not be reserved
    Allocation(TryReserveError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Allocation(e) => write!(f, "Allocation failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Allocation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Error::Allocation(err)
    }
}
