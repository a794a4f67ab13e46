//! # Instance Kind: Exact Runtime Type Tag
//!
//! Defines the `Kind` enum, the closed set of runtime shapes an instance
//! can take. This is the type identity consulted by exact-type schemas.
//!
//! ## Exactness
//!
//! Kinds form a flat set with no subtyping: an `Int` is never a `Double`
//! and vice versa. Callers that want "any number" compose a union of the
//! two kinds instead.
//!
//! A JSON number is a `Double` exactly when it is stored as a float
//! (`42.0`), and an `Int` otherwise (`42`).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::error::SchemaError;

/// Runtime shape of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// The absent value.
    Null,
    /// `true` or `false`.
    Bool,
    /// An integral number (signed or unsigned 64-bit).
    Int,
    /// A floating-point number.
    Double,
    /// A UTF-8 string.
    String,
    /// An ordered sequence of instances.
    List,
    /// A string-keyed mapping of instances.
    Map,
}

/// Total number of instance kinds.
pub const KIND_COUNT: usize = 7;

impl Kind {
    /// Returns every kind in declaration order.
    pub fn all() -> &'static [Kind] {
        &[
            Self::Null,
            Self::Bool,
            Self::Int,
            Self::Double,
            Self::String,
            Self::List,
            Self::Map,
        ]
    }

    /// Classify an instance.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(n) if n.is_f64() => Self::Double,
            Value::Number(_) => Self::Int,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::List,
            Value::Object(_) => Self::Map,
        }
    }

    /// Whether `value` has exactly this kind.
    pub fn matches(&self, value: &Value) -> bool {
        Self::of(value) == *self
    }

    /// Whether this kind is numeric (`Int` or `Double`).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Double)
    }

    /// Returns the snake_case name used in reasons and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Double => "double",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = SchemaError;

    /// Parse a kind from the name produced by [`Kind::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Self::Null),
            "bool" => Ok(Self::Bool),
            "int" => Ok(Self::Int),
            "double" => Ok(Self::Double),
            "string" => Ok(Self::String),
            "list" => Ok(Self::List),
            "map" => Ok(Self::Map),
            other => Err(SchemaError::UnknownKind(other.to_string())),
        }
    }
}
