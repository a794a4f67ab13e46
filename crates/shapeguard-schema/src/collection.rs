//! # Collection and Array Schemas
//!
//! A collection accepts either a list or a map and validates every element
//! against one schema. Both shapes are first flattened into ordered
//! `(label, value)` pairs: list indices become `"0"`, `"1"`, ...; map keys
//! are used as labels.
//!
//! ## Algorithm
//!
//! 1. Reject anything that is not a list or a map.
//! 2. `len >= min_items`.
//! 3. `len <= max_items` (when set).
//! 4. When `unique_items` (the default), no two elements are equal.
//! 5. Trace each element one segment down under its label; the first
//!    rejecting element ends the walk and its node is returned.
//!
//! An array is a collection that first insists on a list.

use std::fmt;

use serde_json::Value;
use shapeguard_core::value::{distinct_count, labeled_items};
use shapeguard_core::DiagnosticNode;

use crate::schema::Schema;

/// List or map whose elements all match one schema.
#[derive(Debug, Clone)]
pub struct CollectionSchema {
    element: Box<Schema>,
    min_items: usize,
    max_items: Option<usize>,
    unique_items: bool,
}

impl CollectionSchema {
    /// Collection of unique elements matching `element`, with no size bounds.
    pub fn new(element: impl Into<Schema>) -> Self {
        Self {
            element: Box::new(element.into()),
            min_items: 0,
            max_items: None,
            unique_items: true,
        }
    }

    /// Require at least `min` elements.
    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = min;
        self
    }

    /// Require at most `max` elements.
    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Whether duplicate elements are rejected. Defaults to `true`.
    pub fn unique_items(mut self, unique: bool) -> Self {
        self.unique_items = unique;
        self
    }

    /// Schema every element must match.
    pub fn element(&self) -> &Schema {
        &self.element
    }

    /// Trace a list or map below `parent`.
    pub fn trace_from(&self, value: &Value, parent: &DiagnosticNode) -> DiagnosticNode {
        let Some(items) = labeled_items(value) else {
            return parent.invalidate("expected a Map or a List");
        };

        let count = items.len();
        if count < self.min_items {
            return parent.invalidate(format!(
                "{count} items is less than minItems {}",
                self.min_items
            ));
        }
        if let Some(max) = self.max_items {
            if count > max {
                return parent.invalidate(format!("{count} items is greater than maxItems {max}"));
            }
        }
        if self.unique_items && distinct_count(items.iter().map(|(_, v)| *v)) != count {
            return parent.invalidate("items are not unique");
        }

        for (label, item) in &items {
            let node = self.element.trace_from(item, &parent.child(label));
            if !node.is_valid() {
                tracing::trace!(label = %label, path = node.path(), "collection element rejected");
                return node;
            }
        }

        parent.validate("value matched the wrapped schema")
    }

    fn describe(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{name}({}", self.element)?;
        if self.min_items > 0 {
            write!(f, ", minItems: {}", self.min_items)?;
        }
        if let Some(max) = self.max_items {
            write!(f, ", maxItems: {max}")?;
        }
        if !self.unique_items {
            f.write_str(", uniqueItems: false")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for CollectionSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.describe("Collection", f)
    }
}

/// List whose elements all match one schema.
#[derive(Debug, Clone)]
pub struct ArraySchema {
    collection: CollectionSchema,
}

impl ArraySchema {
    /// List of unique elements matching `element`, with no size bounds.
    pub fn new(element: impl Into<Schema>) -> Self {
        Self {
            collection: CollectionSchema::new(element),
        }
    }

    /// Require at least `min` elements.
    pub fn min_items(mut self, min: usize) -> Self {
        self.collection = self.collection.min_items(min);
        self
    }

    /// Require at most `max` elements.
    pub fn max_items(mut self, max: usize) -> Self {
        self.collection = self.collection.max_items(max);
        self
    }

    /// Whether duplicate elements are rejected. Defaults to `true`.
    pub fn unique_items(mut self, unique: bool) -> Self {
        self.collection = self.collection.unique_items(unique);
        self
    }

    /// Schema every element must match.
    pub fn element(&self) -> &Schema {
        self.collection.element()
    }

    /// Trace a list below `parent`; maps are rejected.
    pub fn trace_from(&self, value: &Value, parent: &DiagnosticNode) -> DiagnosticNode {
        if !value.is_array() {
            return parent.invalidate("expected a List");
        }
        self.collection.trace_from(value, parent)
    }
}

impl From<CollectionSchema> for ArraySchema {
    fn from(collection: CollectionSchema) -> Self {
        Self { collection }
    }
}

impl fmt::Display for ArraySchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.collection.describe("Array", f)
    }
}
