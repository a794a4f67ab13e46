//! Property tests: algebraic laws that hold for every instance.

use proptest::prelude::*;
use serde_json::{json, Value};
use shapeguard_schema::{Kind, NumberSchema, Schema, StringSchema};

/// Arbitrary JSON values, floats included.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(
        3,  // depth
        32, // desired size
        6,  // items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..6).prop_map(|m| {
                    let map: serde_json::Map<String, Value> = m.into_iter().collect();
                    Value::Object(map)
                }),
            ]
        },
    )
}

/// A fixed pool of schemas covering every variant.
fn schema_pool() -> Vec<Schema> {
    vec![
        Schema::exact(Kind::Int),
        Schema::exact(Kind::Double),
        Schema::exact(Kind::String),
        Schema::exact(Kind::Null),
        Schema::from(StringSchema::new().max_length(4)),
        Schema::from(StringSchema::new().pattern("a").unwrap()),
        Schema::from(NumberSchema::new().minimum(0.0)),
        Schema::from(NumberSchema::new().multiple_of(2.0)),
        Schema::enumeration([json!(true), json!("a"), Value::Null]),
        Schema::optional(Schema::exact(Kind::Bool)),
        Schema::any_optional(),
        Schema::union([Schema::exact(Kind::Bool), Schema::number()]),
        Schema::intersection([Schema::number(), Schema::exact(Kind::Int)]),
        Schema::object([("a", Schema::optional(Schema::number()))]),
        Schema::strict_object([("a", Schema::any_optional())]),
        Schema::collection(Schema::any_optional()),
        Schema::array(Schema::number()),
        Schema::custom(|v| v.is_array()),
    ]
}

fn schema_index() -> impl Strategy<Value = usize> {
    0..schema_pool().len()
}

proptest! {
    /// validate is exactly the verdict of trace.
    #[test]
    fn validate_matches_trace(i in schema_index(), v in json_value()) {
        let schema = &schema_pool()[i];
        prop_assert_eq!(schema.validate(&v), schema.trace(&v).is_valid());
    }

    /// A union accepts iff some member accepts.
    #[test]
    fn union_is_disjunction(a in schema_index(), b in schema_index(), v in json_value()) {
        let pool = schema_pool();
        let union = Schema::union([pool[a].clone(), pool[b].clone()]);
        prop_assert_eq!(union.validate(&v), pool[a].validate(&v) || pool[b].validate(&v));
    }

    /// An intersection accepts iff every member accepts.
    #[test]
    fn intersection_is_conjunction(a in schema_index(), b in schema_index(), v in json_value()) {
        let pool = schema_pool();
        let both = Schema::intersection([pool[a].clone(), pool[b].clone()]);
        prop_assert_eq!(both.validate(&v), pool[a].validate(&v) && pool[b].validate(&v));
    }

    /// Optional always accepts null.
    #[test]
    fn optional_accepts_null(i in schema_index()) {
        let schema = Schema::optional(schema_pool()[i].clone());
        prop_assert!(schema.validate(&Value::Null));
        prop_assert!(Schema::any_optional().validate(&Value::Null));
    }

    /// Exact-type accepts exactly the values of its kind.
    #[test]
    fn exact_matches_kind(v in json_value()) {
        for kind in Kind::all() {
            prop_assert_eq!(Schema::exact(*kind).validate(&v), Kind::of(&v) == *kind);
        }
    }

    /// Extra keys never change a non-strict object's verdict, and always
    /// reject under strict mode.
    #[test]
    fn extra_keys_and_strictness(
        name in "[a-z]{1,8}",
        age in any::<i64>(),
        extra_key in "x[a-z]{0,6}",
        extra_value in json_value(),
    ) {
        let fields = [
            ("name", Schema::exact(Kind::String)),
            ("age", Schema::exact(Kind::Int)),
        ];
        let lax = Schema::object(fields.clone());
        let strict = Schema::strict_object(fields);

        let base = json!({"name": name, "age": age});
        let mut widened = base.clone();
        widened[extra_key.as_str()] = extra_value;

        prop_assert!(lax.validate(&base));
        prop_assert!(strict.validate(&base));
        prop_assert_eq!(lax.validate(&widened), lax.validate(&base));
        prop_assert!(!strict.validate(&widened));
    }

    /// Rejection paths only ever extend the caller's parent path.
    #[test]
    fn rejection_path_extends_parent(i in schema_index(), v in json_value()) {
        let schema = &schema_pool()[i];
        let parent = shapeguard_schema::DiagnosticNode::root().child("root");
        let node = schema.trace_from(&v, &parent);
        let path = node.path().unwrap_or_default();
        prop_assert!(path == "root" || path.starts_with("root."), "unexpected path {}", path);
    }
}
