//! # Schema: Closed Variant Set and Dispatch
//!
//! `Schema` is the single entry point callers hold. Each variant wraps a
//! configuration struct that knows how to trace one kind of rule; the enum
//! dispatches with an exhaustive `match`, so adding a variant forces every
//! consumer to handle it.
//!
//! ## Purity
//!
//! Schemas are immutable once built. Tracing takes `&self`, touches no
//! shared state and may run concurrently on the same schema from any
//! number of threads. Recursion depth follows the nesting depth of the
//! instance; there is no depth cap.

use std::fmt;

use serde_json::Value;
use shapeguard_core::{DiagnosticNode, Kind, ValidationError};

use crate::collection::{ArraySchema, CollectionSchema};
use crate::combinator::{IntersectionSchema, UnionSchema};
use crate::custom::CustomSchema;
use crate::enumeration::EnumSchema;
use crate::exact::ExactSchema;
use crate::number::NumberSchema;
use crate::object::ObjectSchema;
use crate::optional::OptionalSchema;
use crate::string::StringSchema;

/// An immutable rule tree describing accepted instance shapes.
#[derive(Debug, Clone)]
pub enum Schema {
    /// Exact runtime kind.
    Exact(ExactSchema),
    /// String with length and pattern constraints.
    String(StringSchema),
    /// Number with divisibility and range constraints.
    Number(NumberSchema),
    /// One of a fixed set of literal values.
    Enum(EnumSchema),
    /// Null, or whatever the wrapped schema accepts.
    Optional(OptionalSchema),
    /// At least one member accepts.
    Union(UnionSchema),
    /// Every member accepts.
    Intersection(IntersectionSchema),
    /// String-keyed map with per-field schemas.
    Object(ObjectSchema),
    /// List or map whose elements all match one schema.
    Collection(CollectionSchema),
    /// List whose elements all match one schema.
    Array(ArraySchema),
    /// Caller-supplied predicate.
    Custom(CustomSchema),
}

impl Schema {
    /// Trace `value` from the root node.
    pub fn trace(&self, value: &Value) -> DiagnosticNode {
        self.trace_from(value, &DiagnosticNode::root())
    }

    /// Trace `value` below `parent`, returning the judged node.
    ///
    /// The returned node is either the first rejection found along the
    /// traversal order or an acceptance note.
    pub fn trace_from(&self, value: &Value, parent: &DiagnosticNode) -> DiagnosticNode {
        match self {
            Self::Exact(s) => s.trace_from(value, parent),
            Self::String(s) => s.trace_from(value, parent),
            Self::Number(s) => s.trace_from(value, parent),
            Self::Enum(s) => s.trace_from(value, parent),
            Self::Optional(s) => s.trace_from(value, parent),
            Self::Union(s) => s.trace_from(value, parent),
            Self::Intersection(s) => s.trace_from(value, parent),
            Self::Object(s) => s.trace_from(value, parent),
            Self::Collection(s) => s.trace_from(value, parent),
            Self::Array(s) => s.trace_from(value, parent),
            Self::Custom(s) => s.trace_from(value, parent),
        }
    }

    /// Whether `value` is accepted. Equivalent to `self.trace(value).is_valid()`.
    pub fn validate(&self, value: &Value) -> bool {
        self.trace(value).is_valid()
    }

    /// Trace `value` and convert a rejection into a [`ValidationError`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Rejected` carrying the path and reason of
    /// the first rejection.
    pub fn check(&self, value: &Value) -> Result<DiagnosticNode, ValidationError> {
        let node = self.trace(value);
        if !node.is_valid() {
            tracing::debug!(
                path = node.path().unwrap_or("(root)"),
                reason = node.reason().unwrap_or_default(),
                "instance rejected"
            );
        }
        node.into_result()
    }

    // -- Shorthand constructors ------------------------------------------

    /// Accept only instances of exactly `kind`.
    pub fn exact(kind: Kind) -> Self {
        Self::Exact(ExactSchema::new(kind))
    }

    /// Any string.
    pub fn string() -> Self {
        Self::String(StringSchema::new())
    }

    /// Any number.
    pub fn number() -> Self {
        Self::Number(NumberSchema::new())
    }

    /// One of `values`, compared by value equality.
    pub fn enumeration(values: impl IntoIterator<Item = Value>) -> Self {
        Self::Enum(EnumSchema::new(values))
    }

    /// Null, or anything `inner` accepts.
    pub fn optional(inner: impl Into<Schema>) -> Self {
        Self::Optional(OptionalSchema::new(inner))
    }

    /// Optional with no wrapped schema: accepts everything.
    pub fn any_optional() -> Self {
        Self::Optional(OptionalSchema::any())
    }

    /// First accepting member wins.
    pub fn union(members: impl IntoIterator<Item = Schema>) -> Self {
        Self::Union(UnionSchema::new(members))
    }

    /// First rejecting member wins.
    pub fn intersection(members: impl IntoIterator<Item = Schema>) -> Self {
        Self::Intersection(IntersectionSchema::new(members))
    }

    /// Non-strict object over ordered `(name, schema)` fields.
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Schema)>) -> Self {
        Self::Object(ObjectSchema::new(fields))
    }

    /// Object that also rejects keys outside `fields`.
    pub fn strict_object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Schema)>) -> Self {
        Self::Object(ObjectSchema::new(fields).strict(true))
    }

    /// List or map of unique elements matching `element`.
    pub fn collection(element: impl Into<Schema>) -> Self {
        Self::Collection(CollectionSchema::new(element))
    }

    /// List of unique elements matching `element`.
    pub fn array(element: impl Into<Schema>) -> Self {
        Self::Array(ArraySchema::new(element))
    }

    /// Accept whatever `predicate` returns `true` for.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::Custom(CustomSchema::new(predicate))
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(s) => fmt::Display::fmt(s, f),
            Self::String(s) => fmt::Display::fmt(s, f),
            Self::Number(s) => fmt::Display::fmt(s, f),
            Self::Enum(s) => fmt::Display::fmt(s, f),
            Self::Optional(s) => fmt::Display::fmt(s, f),
            Self::Union(s) => fmt::Display::fmt(s, f),
            Self::Intersection(s) => fmt::Display::fmt(s, f),
            Self::Object(s) => fmt::Display::fmt(s, f),
            Self::Collection(s) => fmt::Display::fmt(s, f),
            Self::Array(s) => fmt::Display::fmt(s, f),
            Self::Custom(s) => fmt::Display::fmt(s, f),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Schema {
                fn from(s: $ty) -> Self {
                    Self::$variant(s)
                }
            }
        )*
    };
}

impl_from_variant! {
    Exact => ExactSchema,
    String => StringSchema,
    Number => NumberSchema,
    Enum => EnumSchema,
    Optional => OptionalSchema,
    Union => UnionSchema,
    Intersection => IntersectionSchema,
    Object => ObjectSchema,
    Collection => CollectionSchema,
    Array => ArraySchema,
    Custom => CustomSchema,
}

impl From<Kind> for Schema {
    fn from(kind: Kind) -> Self {
        Self::exact(kind)
    }
}
