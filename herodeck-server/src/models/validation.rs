//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is below zero when it shouldn't be
    Negative { field: &'static str },

    /// Field exceeds its upper bound
    TooLarge { field: &'static str, max: i64 },

    /// Value couldn't be parsed into the expected type
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { field } => {
                write!(f, "{} must be greater than or equal to 0", field)
            }
            Self::TooLarge { field, max } => {
                write!(f, "{} must be less than or equal to {}", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
