//! # String Schema
//!
//! Checks, in order and stopping at the first failure:
//!
//! 1. the instance is a string,
//! 2. its length is at least `min_length`,
//! 3. its length is at most `max_length` (when set),
//! 4. the pattern finds a match somewhere in it (when set).
//!
//! Length is counted in Unicode scalar values. The pattern is searched,
//! not anchored: `b` matches `"abc"`. Anchor explicitly with `^...$`.
//!
//! Patterns are compiled when the schema is built, so an invalid pattern
//! surfaces from [`StringSchema::pattern`] rather than during tracing.

use std::fmt;

use regex::Regex;
use serde_json::Value;
use shapeguard_core::{DiagnosticNode, SchemaError};

/// String with length and pattern constraints.
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    min_length: usize,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl StringSchema {
    /// Any string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `min` characters.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    /// Require at most `max` characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Require a match of `pattern` somewhere in the string.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidPattern` if `pattern` does not compile.
    pub fn pattern(mut self, pattern: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(pattern).map_err(|e| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        self.pattern = Some(regex);
        Ok(self)
    }

    /// Trace a string below `parent`, checking length before pattern.
    pub fn trace_from(&self, value: &Value, parent: &DiagnosticNode) -> DiagnosticNode {
        let Value::String(s) = value else {
            return parent.invalidate("not a string");
        };

        let length = s.chars().count();
        if length < self.min_length {
            return parent.invalidate(format!(
                "length {length} is less than minLength {}",
                self.min_length
            ));
        }
        if let Some(max) = self.max_length {
            if length > max {
                return parent.invalidate(format!(
                    "length {length} is greater than maxLength {max}"
                ));
            }
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(s) {
                return parent.invalidate(format!("{value} does not match pattern {pattern}"));
            }
        }

        parent.validate(value.to_string())
    }
}

impl fmt::Display for StringSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "String(minLength: {}", self.min_length)?;
        if let Some(max) = self.max_length {
            write!(f, ", maxLength: {max}")?;
        }
        if let Some(pattern) = &self.pattern {
            write!(f, ", pattern: {pattern}")?;
        }
        f.write_str(")")
    }
}
