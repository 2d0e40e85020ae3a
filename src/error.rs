//! Error types for delta construction and application.

use thiserror::Error;

/// DeltaError represents a failure to create or apply a delta.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeltaError {
    #[error("invalid argument: {name} must be a {expected}, got {actual}")]
    InvalidArgument {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("{path}: type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("{path}: cannot descend into {actual}")]
    NotAContainer { path: String, actual: String },

    #[error("{path}: segment {segment:?} is not a list index")]
    InvalidIndex { path: String, segment: String },

    #[error("{operator} {path}: {message}")]
    MalformedOperand {
        operator: String,
        path: String,
        message: String,
    },
}

impl DeltaError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(
        name: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        DeltaError::InvalidArgument {
            name: name.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        DeltaError::TypeMismatch {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates an error for a write that has to pass through a scalar.
    pub fn not_a_container(path: impl Into<String>, actual: impl Into<String>) -> Self {
        DeltaError::NotAContainer {
            path: path.into(),
            actual: actual.into(),
        }
    }

    /// Creates an error for a non-index segment applied to a list.
    pub fn invalid_index(path: impl Into<String>, segment: impl Into<String>) -> Self {
        DeltaError::InvalidIndex {
            path: path.into(),
            segment: segment.into(),
        }
    }

    /// Creates a malformed operand error.
    pub fn malformed_operand(
        operator: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        DeltaError::MalformedOperand {
            operator: operator.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias for delta results.
pub type DeltaResult<T> = Result<T, DeltaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeltaError::invalid_argument("original", "map", "string");
        assert_eq!(
            err.to_string(),
            "invalid argument: original must be a map, got string"
        );

        let err = DeltaError::type_mismatch("counters.hits", "number", "string");
        assert!(err.to_string().contains("type mismatch"));
        assert!(err.to_string().starts_with("counters.hits"));
    }

    #[test]
    fn test_malformed_operand_display() {
        let err = DeltaError::malformed_operand("$rename", "a.b", "target must be a string");
        assert_eq!(err.to_string(), "$rename a.b: target must be a string");
    }
}
