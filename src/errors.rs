//! Error types for tesseroid discretization
//!
//! This module defines the single error type shared by the geometry,
//! discretization, configuration and isostasy modules.

use thiserror::Error;

/// Main error type for the tesseroids library
#[derive(Error, Debug)]
pub enum DiscretizationError {
    /// The split work-list would grow past its fixed capacity
    #[error("Stack overflow: split stack capacity of {capacity} exceeded")]
    StackOverflow {
        /// Capacity of the stack that overflowed
        capacity: usize,
    },

    /// The buffer of accepted small tesseroids would grow past its fixed capacity
    #[error("Output overflow: small tesseroids capacity of {capacity} exceeded")]
    OutputOverflow {
        /// Capacity of the output buffer that overflowed
        capacity: usize,
    },

    /// Caller contract violation detected before any work is done
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be applied
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DiscretizationError {
    /// Numeric status code of this error
    ///
    /// Stack overflows map to `-1`, output overflows to `-2` and every other
    /// failure to `-3`. Success is reported as `0` by
    /// [`discretization_status`](crate::discretization::discretization_status).
    pub fn error_code(&self) -> i32 {
        match self {
            DiscretizationError::StackOverflow { .. } => -1,
            DiscretizationError::OutputOverflow { .. } => -2,
            _ => -3,
        }
    }

    /// Whether this error is one of the two capacity overflows
    pub fn is_overflow(&self) -> bool {
        matches!(
            self,
            DiscretizationError::StackOverflow { .. } | DiscretizationError::OutputOverflow { .. }
        )
    }
}

/// Result type for tesseroids operations
pub type Result<T> = std::result::Result<T, DiscretizationError>;

/// Helper to build an [`DiscretizationError::InvalidArgument`]
pub fn invalid_arg(message: impl Into<String>) -> DiscretizationError {
    DiscretizationError::InvalidArgument(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let stack = DiscretizationError::StackOverflow { capacity: 2 };
        let output = DiscretizationError::OutputOverflow { capacity: 2 };
        assert_eq!(stack.error_code(), -1);
        assert_eq!(output.error_code(), -2);
        assert_eq!(invalid_arg("bad").error_code(), -3);
        assert_eq!(DiscretizationError::Config("x".into()).error_code(), -3);
    }

    #[test]
    fn test_overflow_classification() {
        assert!(DiscretizationError::StackOverflow { capacity: 1 }.is_overflow());
        assert!(DiscretizationError::OutputOverflow { capacity: 1 }.is_overflow());
        assert!(!invalid_arg("ratio").is_overflow());
    }

    #[test]
    fn test_display_messages() {
        let err = DiscretizationError::StackOverflow { capacity: 100 };
        assert!(err.to_string().contains("100"));
        let err = invalid_arg("west must be lower than east");
        let expected = "Invalid argument: west must be lower than east";
        assert_eq!(err.to_string(), expected);
    }
}
