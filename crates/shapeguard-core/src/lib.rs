//! # shapeguard-core: Foundational Types for shapeguard
//!
//! This crate is the leaf of the shapeguard workspace. It defines the
//! pieces every schema variant shares: how an instance is classified,
//! how a verdict is recorded, and how failures are reported.
//!
//! ## Key Design Principles
//!
//! 1. **Instances are `serde_json::Value`.** Null, booleans, integers,
//!    floats, strings, lists and string-keyed maps. No instance carries a
//!    schema reference.
//!
//! 2. **Single `Kind` enum.** The exact runtime shape of an instance. No
//!    subtyping: width is recovered by composing unions.
//!
//! 3. **Immutable `DiagnosticNode`.** Every transition returns a new node,
//!    so a node can be shared freely across threads and recursive calls.
//!
//! 4. **Rejections are data.** Tracing never fails; [`ValidationError`] is
//!    only produced when a caller asks for a `Result`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `shapeguard-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod kind;
pub mod node;
pub mod value;

pub use error::{SchemaError, ValidationError};
pub use kind::{Kind, KIND_COUNT};
pub use node::DiagnosticNode;
pub use serde_json::Value;
