//! Enum schema: membership in a fixed set of literal values.
//!
//! Membership is value equality (`serde_json::Value: PartialEq`), so `1`
//! and `1.0` are different members and maps compare regardless of key
//! order. Duplicate values are dropped at construction, keeping the first
//! occurrence.

use std::fmt;

use serde_json::Value;
use shapeguard_core::value::bracketed;
use shapeguard_core::DiagnosticNode;

/// One of a fixed set of literal values.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSchema {
    values: Vec<Value>,
}

impl EnumSchema {
    /// Allowed `values`, with repeats collapsed to the first occurrence.
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self { values: unique }
    }

    /// Allowed values in configured order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Accept at `parent` when `value` equals one of the allowed values.
    pub fn trace_from(&self, value: &Value, parent: &DiagnosticNode) -> DiagnosticNode {
        let allowed = bracketed(&self.values);
        if self.values.contains(value) {
            parent.validate(format!("{value} is one of {allowed}"))
        } else {
            parent.invalidate(format!("{value} is not one of {allowed}"))
        }
    }
}

impl fmt::Display for EnumSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Enum({})", bracketed(&self.values))
    }
}
