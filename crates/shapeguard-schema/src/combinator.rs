//! # Union and Intersection
//!
//! Both combinators trace their members in configured order against the
//! same instance and the same parent node. Members never see each other's
//! output.
//!
//! - **Union** returns the first accepting member's node unchanged. When no
//!   member accepts, it rejects at its own path with a reason listing every
//!   member; individual member reasons are not kept.
//! - **Intersection** returns the first rejecting member's node unchanged.
//!   When every member accepts, it accepts at its own path.
//!
//! An empty union rejects everything; an empty intersection accepts
//! everything.

use std::fmt;

use serde_json::Value;
use shapeguard_core::value::bracketed;
use shapeguard_core::DiagnosticNode;

use crate::schema::Schema;

/// At least one member accepts.
#[derive(Debug, Clone, Default)]
pub struct UnionSchema {
    members: Vec<Schema>,
}

impl UnionSchema {
    /// Union over `members`, tried in order.
    pub fn new(members: impl IntoIterator<Item = Schema>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    /// Members in configured order.
    pub fn members(&self) -> &[Schema] {
        &self.members
    }

    /// Return the first accepting member's node, else reject at `parent`.
    pub fn trace_from(&self, value: &Value, parent: &DiagnosticNode) -> DiagnosticNode {
        for member in &self.members {
            let node = member.trace_from(value, parent);
            if node.is_valid() {
                return node;
            }
        }
        parent.invalidate(format!(
            "value did not match any of {}",
            bracketed(&self.members)
        ))
    }
}

impl fmt::Display for UnionSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Union({})", bracketed(&self.members))
    }
}

/// Every member accepts.
#[derive(Debug, Clone, Default)]
pub struct IntersectionSchema {
    members: Vec<Schema>,
}

impl IntersectionSchema {
    /// Intersection over `members`, checked in order.
    pub fn new(members: impl IntoIterator<Item = Schema>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    /// Members in configured order.
    pub fn members(&self) -> &[Schema] {
        &self.members
    }

    /// Return the first rejecting member's node, else accept at `parent`.
    pub fn trace_from(&self, value: &Value, parent: &DiagnosticNode) -> DiagnosticNode {
        for (i, member) in self.members.iter().enumerate() {
            let node = member.trace_from(value, parent);
            if !node.is_valid() {
                tracing::trace!(member = i, path = node.path(), "intersection member rejected");
                return node;
            }
        }
        parent.validate("all schemas matched")
    }
}

impl fmt::Display for IntersectionSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Intersection({})", bracketed(&self.members))
    }
}
