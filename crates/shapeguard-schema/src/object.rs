//! # Object Schema
//!
//! Validates a string-keyed map against an ordered list of field schemas.
//!
//! ## Algorithm
//!
//! 1. Reject anything that is not a map (`not an object`).
//! 2. In strict mode, reject when the instance has keys outside the
//!    configured fields, naming them in instance order.
//! 3. Trace each configured field, in configured order, one path segment
//!    down under the field name. A missing key is traced as null, so an
//!    optional field accepts it. The first rejecting field ends the walk
//!    and its node is returned.
//! 4. Accept with `all matched`.
//!
//! Keys that are not configured are never traced. In non-strict mode they
//! cannot change the result.

use std::fmt;

use serde_json::Value;
use shapeguard_core::value::bracketed;
use shapeguard_core::DiagnosticNode;

use crate::schema::Schema;

static NULL: Value = Value::Null;

/// String-keyed map with per-field schemas.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    fields: Vec<(String, Schema)>,
    strict: bool,
}

impl ObjectSchema {
    /// Non-strict object over ordered `(name, schema)` fields.
    pub fn new<K: Into<String>>(fields: impl IntoIterator<Item = (K, Schema)>) -> Self {
        fields
            .into_iter()
            .fold(Self::default(), |schema, (name, field)| schema.field(name, field))
    }

    /// Add or replace a field. A replaced field keeps its original position.
    pub fn field(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        let name = name.into();
        let schema = schema.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = schema,
            None => self.fields.push((name, schema)),
        }
        self
    }

    /// Reject keys that are not configured fields.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether unconfigured keys are rejected.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Configured fields in order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.fields.iter().map(|(n, s)| (n.as_str(), s))
    }

    fn is_configured(&self, key: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == key)
    }

    /// Trace a map below `parent`, walking fields in configured order.
    pub fn trace_from(&self, value: &Value, parent: &DiagnosticNode) -> DiagnosticNode {
        let Value::Object(map) = value else {
            return parent.invalidate("not an object");
        };

        if self.strict {
            let unexpected: Vec<&str> = map
                .keys()
                .map(String::as_str)
                .filter(|k| !self.is_configured(k))
                .collect();
            if !unexpected.is_empty() {
                return parent.invalidate(format!("unexpected keys {}", bracketed(unexpected)));
            }
        }

        for (name, schema) in &self.fields {
            let field_value = map.get(name).unwrap_or(&NULL);
            let node = schema.trace_from(field_value, &parent.child(name));
            if !node.is_valid() {
                tracing::trace!(field = %name, path = node.path(), "object field rejected");
                return node;
            }
        }

        parent.validate("all matched")
    }
}

impl fmt::Display for ObjectSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .fields
            .iter()
            .map(|(n, s)| format!("{n}: {s}"))
            .collect();
        let prefix = if self.strict { "StrictObject" } else { "Object" };
        write!(f, "{prefix}({{{}}})", fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shapeguard_core::Kind;

    fn person() -> ObjectSchema {
        ObjectSchema::new([
            ("name", Schema::exact(Kind::String)),
            ("age", Schema::exact(Kind::Int)),
        ])
    }

    fn trace(schema: &ObjectSchema, value: Value) -> DiagnosticNode {
        schema.trace_from(&value, &DiagnosticNode::root())
    }

    #[test]
    fn test_rejects_non_maps() {
        for v in [Value::Null, json!([]), json!("x"), json!(1)] {
            let node = trace(&person(), v);
            assert_eq!(node.reason(), Some("not an object"));
            assert!(node.is_root());
        }
    }

    #[test]
    fn test_missing_field_is_traced_as_null() {
        let node = trace(&person(), json!({"name": "John"}));
        assert!(!node.is_valid());
        assert_eq!(node.path(), Some("age"));
        assert_eq!(node.reason(), Some("expected int, found null"));
    }

    #[test]
    fn test_missing_optional_field_accepted() {
        let schema = person().field("nickname", Schema::optional(Schema::string()));
        let node = trace(&schema, json!({"name": "John", "age": 30}));
        assert!(node.is_valid());
        assert_eq!(node.reason(), Some("all matched"));
    }

    #[test]
    fn test_fields_traced_in_configured_order() {
        // Both fields are wrong; "name" is configured first.
        let node = trace(&person(), json!({"age": "x", "name": 1}));
        assert_eq!(node.path(), Some("name"));
    }

    #[test]
    fn test_extra_keys_ignored_when_not_strict() {
        let node = trace(&person(), json!({"name": "John", "age": 30, "grades": [8, 9]}));
        assert!(node.is_valid());
    }

    #[test]
    fn test_strict_names_unexpected_keys_in_instance_order() {
        let schema = person().strict(true);
        let value: Value =
            serde_json::from_str(r#"{"zeta": 1, "name": "John", "age": 30, "alpha": 2}"#).unwrap();
        let node = trace(&schema, value);
        assert!(!node.is_valid());
        assert!(node.is_root());
        assert_eq!(node.reason(), Some("unexpected keys [zeta, alpha]"));
    }

    #[test]
    fn test_strict_check_precedes_field_checks() {
        let schema = person().strict(true);
        let node = trace(&schema, json!({"extra": true}));
        assert_eq!(node.reason(), Some("unexpected keys [extra]"));
    }

    #[test]
    fn test_strict_accepts_exact_key_set() {
        let schema = person().strict(true);
        assert!(trace(&schema, json!({"name": "John", "age": 30})).is_valid());
    }

    #[test]
    fn test_nested_path() {
        let schema = ObjectSchema::new([("owner", Schema::Object(person()))]);
        let node = trace(&schema, json!({"owner": {"name": "Ann", "age": 1.5}}));
        assert_eq!(node.path(), Some("owner.age"));
        assert_eq!(node.reason(), Some("expected int, found double"));
    }

    #[test]
    fn test_field_replacement_keeps_position() {
        let schema = person().field("name", Schema::string());
        let names: Vec<&str> = schema.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["name", "age"]);
        assert!(trace(&schema, json!({"name": "J", "age": 1})).is_valid());
    }

    #[test]
    fn test_empty_object_schema() {
        assert!(trace(&ObjectSchema::default(), json!({"a": 1})).is_valid());
        assert!(!trace(&ObjectSchema::default().strict(true), json!({"a": 1})).is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            person().to_string(),
            "Object({name: Exact(string), age: Exact(int)})"
        );
        assert_eq!(
            ObjectSchema::default().strict(true).to_string(),
            "StrictObject({})"
        );
    }
}
