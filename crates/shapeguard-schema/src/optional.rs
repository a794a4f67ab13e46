//! Optional schema: null, or whatever the wrapped schema accepts.
//!
//! Null is accepted before the wrapped schema is consulted. Non-null values
//! are traced by the wrapped schema one level down, under the `?` segment.
//! Without a wrapped schema every value is accepted.

use std::fmt;

use serde_json::Value;
use shapeguard_core::DiagnosticNode;

use crate::schema::Schema;

/// Path segment marking descent into an optional's wrapped schema.
pub const OPTIONAL_SEGMENT: &str = "?";

/// Null, or anything the wrapped schema accepts.
#[derive(Debug, Clone, Default)]
pub struct OptionalSchema {
    inner: Option<Box<Schema>>,
}

impl OptionalSchema {
    /// Null, or anything `inner` accepts.
    pub fn new(inner: impl Into<Schema>) -> Self {
        Self {
            inner: Some(Box::new(inner.into())),
        }
    }

    /// No wrapped schema: accepts every value.
    pub fn any() -> Self {
        Self { inner: None }
    }

    /// The wrapped schema, if any.
    pub fn inner(&self) -> Option<&Schema> {
        self.inner.as_deref()
    }

    /// Accept null at `parent`; otherwise trace the wrapped schema one `?` segment down.
    pub fn trace_from(&self, value: &Value, parent: &DiagnosticNode) -> DiagnosticNode {
        if value.is_null() {
            return parent.validate("value is null");
        }
        match &self.inner {
            Some(inner) => inner.trace_from(value, &parent.child(OPTIONAL_SEGMENT)),
            None => parent.validate("no wrapped schema provided, any value accepted"),
        }
    }
}

impl fmt::Display for OptionalSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(inner) => write!(f, "Optional({inner})"),
            None => f.write_str("Optional"),
        }
    }
}
