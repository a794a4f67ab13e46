//! # Instance Helpers
//!
//! Small utilities over `serde_json::Value` shared by the schema variants:
//! numeric extraction, value-equality distinct counting and the
//! `(label, value)` normalization used by collection schemas.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use serde_json::Value;

use crate::kind::Kind;

/// Numeric value of an instance, if it is a number.
///
/// Integers beyond 2^53 lose precision in the conversion.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Number of distinct values under value equality.
///
/// Values are bucketed by [`fingerprint`] and compared with full equality
/// only within a bucket. Maps compare independently of key order.
pub fn distinct_count<'a, I>(values: I) -> usize
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut buckets: HashMap<u64, Vec<&Value>> = HashMap::new();
    let mut count = 0;
    for value in values {
        let bucket = buckets.entry(fingerprint(value)).or_default();
        if !bucket.contains(&value) {
            bucket.push(value);
            count += 1;
        }
    }
    count
}

/// Hash consistent with `Value` equality.
///
/// Equal values always share a fingerprint: integers and floats hash under
/// different tags, `-0.0` hashes as `0.0`, and map entries are hashed in
/// sorted key order.
pub fn fingerprint(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    hash_value(value, &mut hasher);
    hasher.finish()
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    Kind::of(value).hash(state);
    match value {
        Value::Null => {}
        Value::Bool(b) => b.hash(state),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.hash(state);
            } else if let Some(u) = n.as_u64() {
                u.hash(state);
            } else if let Some(f) = n.as_f64() {
                let f = if f == 0.0 { 0.0 } else { f };
                f.to_bits().hash(state);
            }
        }
        Value::String(s) => s.hash(state),
        Value::Array(items) => {
            items.len().hash(state);
            for item in items {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            map.len().hash(state);
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (key, item) in entries {
                key.hash(state);
                hash_value(item, state);
            }
        }
    }
}

/// Flatten a list or map into ordered `(label, value)` pairs.
///
/// List indices become `"0"`, `"1"`, ...; map keys are used as-is in
/// insertion order. Returns `None` for any other shape.
pub fn labeled_items(value: &Value) -> Option<Vec<(String, &Value)>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        ),
        Value::Object(map) => Some(map.iter().map(|(k, v)| (k.clone(), v)).collect()),
        _ => None,
    }
}

/// Join values into a bracketed, comma-separated list.
pub fn bracketed<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let parts: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
