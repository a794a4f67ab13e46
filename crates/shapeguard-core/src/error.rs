//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types used throughout shapeguard. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Rejections found while tracing an instance are data, carried by
//!   [`DiagnosticNode`](crate::DiagnosticNode). They only become a
//!   [`ValidationError`] when a caller asks for a `Result`.
//! - Malformed schema configuration (an uncompilable pattern) is a caller
//!   fault and surfaces as [`SchemaError`] at construction time.

use thiserror::Error;

/// Error raised while building a schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A string schema pattern is not a valid regular expression.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// Compiler message from the regex engine.
        reason: String,
    },

    /// A kind name did not match any known instance kind.
    #[error("unknown kind: {0:?}")]
    UnknownKind(String),
}

/// An instance was rejected by a schema.
///
/// Carries the location and reason of the first rejection encountered
/// along the traversal order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The instance did not conform.
    #[error("{}: {reason}", .path.as_deref().unwrap_or("(root)"))]
    Rejected {
        /// Dotted location of the rejection; `None` is the root.
        path: Option<String>,
        /// Human-readable reason.
        reason: String,
    },
}

impl ValidationError {
    /// Dotted location of the rejection, `None` at the root.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Rejected { path, .. } => path.as_deref(),
        }
    }

    /// The rejection reason.
    pub fn reason(&self) -> &str {
        match self {
            Self::Rejected { reason, .. } => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display_root() {
        let err = ValidationError::Rejected {
            path: None,
            reason: "not an object".to_string(),
        };
        assert_eq!(err.to_string(), "(root): not an object");
        assert_eq!(err.path(), None);
    }

    #[test]
    fn test_rejected_display_nested() {
        let err = ValidationError::Rejected {
            path: Some("grades.1".to_string()),
            reason: "expected int, found double".to_string(),
        };
        assert_eq!(err.to_string(), "grades.1: expected int, found double");
        assert_eq!(err.reason(), "expected int, found double");
    }

    #[test]
    fn test_invalid_pattern_display() {
        let err = SchemaError::InvalidPattern {
            pattern: "(".to_string(),
            reason: "unclosed group".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("\"(\""));
        assert!(display.contains("unclosed group"));
    }
}
