//! Custom schema: a caller-supplied predicate.
//!
//! The predicate is called exactly once per trace. It is expected to be
//! pure and total; if it panics, the panic propagates to the caller.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use shapeguard_core::DiagnosticNode;

/// Shared predicate type.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

const UNNAMED: &str = "<predicate>";

/// Accepts whatever the predicate returns `true` for.
#[derive(Clone)]
pub struct CustomSchema {
    predicate: Predicate,
    name: String,
}

impl CustomSchema {
    /// Wrap an unnamed predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            name: UNNAMED.to_string(),
        }
    }

    /// Name the predicate in reasons and descriptions.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Predicate name used in reasons and descriptions.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accept or reject at `parent` by calling the predicate.
    pub fn trace_from(&self, value: &Value, parent: &DiagnosticNode) -> DiagnosticNode {
        if (self.predicate)(value) {
            parent.validate(format!("value accepted by predicate {}", self.name))
        } else {
            parent.invalidate(format!("value rejected by predicate {}", self.name))
        }
    }
}

impl fmt::Debug for CustomSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomSchema")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CustomSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Custom({})", self.name)
    }
}
