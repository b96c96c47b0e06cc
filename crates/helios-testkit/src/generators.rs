//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::Value;

use helios_core::{MemoryObject, Relationship};

/// Generate a path-like identifier (category, key, source).
pub fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}(/[a-z0-9_]{1,15}){0,2}".prop_map(String::from)
}

/// Generate a canonical millisecond-precision UTC timestamp.
pub fn timestamp() -> impl Strategy<Value = String> {
    (
        2000u32..=2099,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1000,
    )
        .prop_map(|(year, month, day, hour, minute, second, millis)| {
            format!(
                "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{millis:03}Z"
            )
        })
}

/// Generate a relationship.
pub fn relationship() -> impl Strategy<Value = Relationship> {
    (
        identifier(),
        prop_oneof![
            Just("related_to".to_string()),
            Just("depends_on".to_string()),
            Just("part_of".to_string()),
        ],
    )
        .prop_map(|(key, kind)| Relationship::new(key, kind))
}

/// Generate a hashable value: string, integer, boolean, or a small array of
/// strings.
pub fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[ -~]{0,40}".prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        prop::collection::vec("[a-z]{1,8}".prop_map(Value::from), 0..4)
            .prop_map(Value::from),
    ]
}

/// Parameters for generating a memory object.
#[derive(Debug, Clone)]
pub struct MemoryObjectParams {
    pub category: String,
    pub created_at: String,
    pub key: String,
    pub relationships: Vec<Relationship>,
    pub source: String,
    pub value: Value,
}

impl Arbitrary for MemoryObjectParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            identifier(),
            timestamp(),
            identifier(),
            prop::collection::vec(relationship(), 0..5),
            identifier(),
            value(),
        )
            .prop_map(
                |(category, created_at, key, relationships, source, value)| {
                    MemoryObjectParams {
                        category,
                        created_at,
                        key,
                        relationships,
                        source,
                        value,
                    }
                },
            )
            .boxed()
    }
}

/// Build a memory object from parameters, operational fields defaulted.
pub fn object_from_params(params: &MemoryObjectParams) -> MemoryObject {
    MemoryObject {
        category: params.category.clone(),
        created_at: params.created_at.clone(),
        key: params.key.clone(),
        relationships: params.relationships.clone(),
        source: params.source.clone(),
        value: params.value.clone(),
        ..Default::default()
    }
}
