//! Exact-type schema.
//!
//! Accepts an instance only when its [`Kind`] equals the configured kind.
//! There is no subtype matching: `Exact(double)` rejects `42` and
//! `Exact(int)` rejects `42.0`. Compose a union for width.

use std::fmt;

use serde_json::Value;
use shapeguard_core::{DiagnosticNode, Kind};

/// Accepts instances of exactly one [`Kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactSchema {
    kind: Kind,
}

impl ExactSchema {
    /// Build an exact-type schema for `kind`.
    pub fn new(kind: Kind) -> Self {
        Self { kind }
    }

    /// The configured kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Accept at `parent` when `value` has exactly the configured kind.
    pub fn trace_from(&self, value: &Value, parent: &DiagnosticNode) -> DiagnosticNode {
        let actual = Kind::of(value);
        if actual == self.kind {
            parent.validate(format!("found {}", self.kind))
        } else {
            parent.invalidate(format!("expected {}, found {actual}", self.kind))
        }
    }
}

impl fmt::Display for ExactSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exact({})", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(kind: Kind, value: Value) -> DiagnosticNode {
        ExactSchema::new(kind).trace_from(&value, &DiagnosticNode::root())
    }

    #[test]
    fn test_double_scenario() {
        assert!(check(Kind::Double, json!(42.0)).is_valid());
        assert!(!check(Kind::Double, json!(42)).is_valid());
        assert!(!check(Kind::Double, Value::Null).is_valid());
        assert!(!check(Kind::Double, json!("42.0")).is_valid());
    }

    #[test]
    fn test_reasons() {
        assert_eq!(check(Kind::Int, json!(1)).reason(), Some("found int"));
        assert_eq!(
            check(Kind::Int, Value::Null).reason(),
            Some("expected int, found null")
        );
        assert_eq!(
            check(Kind::String, json!([])).reason(),
            Some("expected string, found list")
        );
    }

    #[test]
    fn test_null_kind_accepts_only_null() {
        assert!(check(Kind::Null, Value::Null).is_valid());
        assert!(!check(Kind::Null, json!(0)).is_valid());
    }

    #[test]
    fn test_keeps_parent_path() {
        let parent = DiagnosticNode::root().child("age");
        let node = ExactSchema::new(Kind::Int).trace_from(&json!("x"), &parent);
        assert_eq!(node.path(), Some("age"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ExactSchema::new(Kind::Map).to_string(), "Exact(map)");
    }
}
