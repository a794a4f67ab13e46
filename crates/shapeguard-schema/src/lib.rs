//! # shapeguard-schema: Composable Structural Schemas
//!
//! Build an immutable [`Schema`] describing an expected shape, then ask it
//! to accept or reject any `serde_json::Value`. Rejections come back as
//! data: a [`DiagnosticNode`] holding the location and reason of the first
//! failure found, or an acceptance note.
//!
//! ## Variants
//!
//! | Variant | Accepts |
//! |---------|---------|
//! | [`ExactSchema`] | instances of exactly one [`Kind`] |
//! | [`StringSchema`] | strings within length bounds, optionally matching a pattern |
//! | [`NumberSchema`] | numbers within range, optionally a multiple of a divisor |
//! | [`EnumSchema`] | one of a fixed set of values |
//! | [`OptionalSchema`] | null, or what the wrapped schema accepts |
//! | [`UnionSchema`] | what any member accepts |
//! | [`IntersectionSchema`] | what every member accepts |
//! | [`ObjectSchema`] | maps whose configured fields match |
//! | [`CollectionSchema`] | lists or maps whose elements match |
//! | [`ArraySchema`] | lists whose elements match |
//! | [`CustomSchema`] | whatever a predicate accepts |
//!
//! ## Traversal
//!
//! Validation is fail-fast and deterministic: object fields in configured
//! order, collection elements in list or insertion order, union and
//! intersection members in configured order. Paths are dotted: list
//! indices and map keys are segments, and entering an optional's wrapped
//! schema adds a `?` segment.
//!
//! ```
//! use serde_json::json;
//! use shapeguard_schema::{Kind, Schema};
//!
//! let person = Schema::object([
//!     ("name", Schema::exact(Kind::String)),
//!     ("age", Schema::exact(Kind::Int)),
//! ]);
//!
//! assert!(person.validate(&json!({"name": "John", "age": 30})));
//!
//! let node = person.trace(&json!({"name": "John"}));
//! assert_eq!(node.path(), Some("age"));
//! assert_eq!(node.reason(), Some("expected int, found null"));
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `shapeguard-core` internally.
//! - Tracing never returns an error and never panics on instance data.
//!   The only faults are caller faults: an invalid pattern (reported by
//!   [`StringSchema::pattern`]) and a panicking custom predicate.

pub mod collection;
pub mod combinator;
pub mod custom;
pub mod enumeration;
pub mod exact;
pub mod number;
pub mod object;
pub mod optional;
pub mod schema;
pub mod string;

pub use collection::{ArraySchema, CollectionSchema};
pub use combinator::{IntersectionSchema, UnionSchema};
pub use custom::{CustomSchema, Predicate};
pub use enumeration::EnumSchema;
pub use exact::ExactSchema;
pub use number::NumberSchema;
pub use object::ObjectSchema;
pub use optional::{OptionalSchema, OPTIONAL_SEGMENT};
pub use schema::Schema;
pub use string::StringSchema;

pub use shapeguard_core::{DiagnosticNode, Kind, SchemaError, ValidationError};
