//! Validation error types

use std::fmt;

/// Validation error for inbound requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Request body could not be decoded as the expected JSON shape
    MalformedBody { reason: String },

    /// Path identifier is not a valid customer id
    InvalidId { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody { reason } => write!(f, "malformed request body: {}", reason),
            Self::InvalidId { value } => {
                write!(f, "invalid customer id '{}': expected an integer", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
