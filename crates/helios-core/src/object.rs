//! Memory object types and the hash-input projection.
//!
//! A memory object carries six semantic fields covered by the content hash
//! and five operational fields that are not. The integrity boundary is
//! structural: the hash pipeline consumes a [`HashInput`], which can only be
//! built from a [`MemoryObject`] and holds exactly the six hashed fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::canon;
use crate::error::CanonError;

/// A typed link between memory objects. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Key of the target object.
    pub key: String,
    /// Link type, e.g. `related_to`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Relationship {
    pub fn new(key: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: kind.into(),
        }
    }
}

/// The full application-visible memory object.
///
/// The first six fields participate in the content hash. The operational
/// fields below them never reach the serializer: two objects differing only
/// in operational fields hash identically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemoryObject {
    pub category: String,
    pub created_at: String,
    pub key: String,
    pub relationships: Vec<Relationship>,
    pub source: String,
    /// Hashed. `Value::Null` serializes as `"value":null`; it is never
    /// omitted.
    pub value: Value,

    pub updated_at: String,
    pub version: i64,
    pub access_count: i64,
    pub last_accessed: String,
    pub confidence: f64,
}

impl MemoryObject {
    /// Construct a memory object from decoded external JSON.
    ///
    /// Ingest rules: the top-level map must carry
    /// `_helios_schema_version: "1"`, relationships must be `{key, type}`
    /// string maps, and the `value` subtree must contain no nulls, floats,
    /// or out-of-range integers. A top-level `value: null` is exempt from
    /// the null rule: it is part of the hashable surface and serializes as
    /// `null`.
    ///
    /// Distinctions in the input are preserved: a missing `relationships`
    /// field and an empty array both yield an empty vector (never null),
    /// and operational fields default when absent.
    pub fn from_input(input: &Value) -> Result<Self, CanonError> {
        let map = input.as_object().ok_or_else(|| {
            CanonError::MalformedInput("memory object input must be a JSON object".into())
        })?;

        canon::validate_schema_version(map)?;

        let value = map.get("value").cloned().unwrap_or(Value::Null);
        if !value.is_null() {
            canon::validate_ingest(&value, "value")?;
        }

        Ok(Self {
            category: string_field(map, "category"),
            created_at: string_field(map, "created_at"),
            key: string_field(map, "key"),
            relationships: relationships_field(map)?,
            source: string_field(map, "source"),
            value,
            updated_at: string_field(map, "updated_at"),
            version: int_field(map, "version"),
            access_count: int_field(map, "access_count"),
            last_accessed: string_field(map, "last_accessed"),
            confidence: float_field(map, "confidence"),
        })
    }
}

fn string_field(map: &Map<String, Value>, name: &str) -> String {
    map.get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn int_field(map: &Map<String, Value>, name: &str) -> i64 {
    map.get(name).and_then(Value::as_i64).unwrap_or_default()
}

fn float_field(map: &Map<String, Value>, name: &str) -> f64 {
    map.get(name).and_then(Value::as_f64).unwrap_or_default()
}

fn relationships_field(map: &Map<String, Value>) -> Result<Vec<Relationship>, CanonError> {
    let Some(raw) = map.get("relationships") else {
        return Ok(Vec::new());
    };
    let items = raw
        .as_array()
        .ok_or_else(|| CanonError::MalformedInput("relationships must be an array".into()))?;

    let mut rels = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let rel = item.as_object().ok_or_else(|| {
            CanonError::MalformedInput(format!("relationships[{i}] must be an object"))
        })?;
        let key = rel.get("key").and_then(Value::as_str).ok_or_else(|| {
            CanonError::MalformedInput(format!("relationships[{i}] is missing a string \"key\""))
        })?;
        let kind = rel.get("type").and_then(Value::as_str).ok_or_else(|| {
            CanonError::MalformedInput(format!("relationships[{i}] is missing a string \"type\""))
        })?;
        rels.push(Relationship::new(key, kind));
    }
    Ok(rels)
}

/// The projection of a [`MemoryObject`] onto exactly the six hashed fields.
///
/// Operational fields cannot reach the serializer because the canonical
/// field map is built from this projection alone.
#[derive(Debug, Clone)]
pub struct HashInput {
    pub(crate) category: String,
    pub(crate) created_at: String,
    pub(crate) key: String,
    pub(crate) relationships: Vec<Relationship>,
    pub(crate) source: String,
    pub(crate) value: Value,
}

impl HashInput {
    /// Extract the six hash-relevant fields from a memory object.
    pub fn from_object(obj: &MemoryObject) -> Self {
        Self {
            category: obj.category.clone(),
            created_at: obj.created_at.clone(),
            key: obj.key.clone(),
            relationships: obj.relationships.clone(),
            source: obj.source.clone(),
            value: obj.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_input() -> Value {
        json!({
            "_helios_schema_version": "1",
            "category": "project",
            "created_at": "2025-01-15T10:30:00.000Z",
            "key": "test/basic_memory",
            "relationships": [{"key": "project/helios", "type": "related_to"}],
            "source": "user",
            "value": "some value"
        })
    }

    #[test]
    fn test_from_input_extracts_all_fields() {
        let mut input = base_input();
        let map = input.as_object_mut().unwrap();
        map.insert("updated_at".into(), json!("2025-01-16T00:00:00.000Z"));
        map.insert("version".into(), json!(3));
        map.insert("access_count".into(), json!(42));
        map.insert("last_accessed".into(), json!("2025-01-17T00:00:00.000Z"));
        map.insert("confidence".into(), json!(0.95));

        let obj = MemoryObject::from_input(&input).unwrap();
        assert_eq!(obj.category, "project");
        assert_eq!(obj.created_at, "2025-01-15T10:30:00.000Z");
        assert_eq!(obj.key, "test/basic_memory");
        assert_eq!(
            obj.relationships,
            vec![Relationship::new("project/helios", "related_to")]
        );
        assert_eq!(obj.source, "user");
        assert_eq!(obj.value, json!("some value"));
        assert_eq!(obj.updated_at, "2025-01-16T00:00:00.000Z");
        assert_eq!(obj.version, 3);
        assert_eq!(obj.access_count, 42);
        assert_eq!(obj.last_accessed, "2025-01-17T00:00:00.000Z");
        assert!((obj.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_from_input_requires_object() {
        assert!(matches!(
            MemoryObject::from_input(&json!([1, 2])),
            Err(CanonError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_from_input_requires_schema_version() {
        let mut input = base_input();
        input.as_object_mut().unwrap().remove("_helios_schema_version");
        assert!(matches!(
            MemoryObject::from_input(&input),
            Err(CanonError::SchemaVersionMissing)
        ));

        let mut input = base_input();
        input
            .as_object_mut()
            .unwrap()
            .insert("_helios_schema_version".into(), json!("2"));
        assert!(matches!(
            MemoryObject::from_input(&input),
            Err(CanonError::SchemaVersionInvalid { .. })
        ));
    }

    #[test]
    fn test_from_input_top_level_null_value_allowed() {
        let mut input = base_input();
        input.as_object_mut().unwrap().insert("value".into(), Value::Null);
        let obj = MemoryObject::from_input(&input).unwrap();
        assert!(obj.value.is_null());
    }

    #[test]
    fn test_from_input_missing_value_becomes_null() {
        let mut input = base_input();
        input.as_object_mut().unwrap().remove("value");
        let obj = MemoryObject::from_input(&input).unwrap();
        assert!(obj.value.is_null());
    }

    #[test]
    fn test_from_input_rejects_nested_null_in_value() {
        let mut input = base_input();
        input
            .as_object_mut()
            .unwrap()
            .insert("value".into(), json!({"inner": null}));
        let err = MemoryObject::from_input(&input).unwrap_err();
        assert!(matches!(err, CanonError::NullProhibited { ref path } if path == "value.inner"));
    }

    #[test]
    fn test_from_input_rejects_float_in_value() {
        let raw = r#"{
            "_helios_schema_version": "1",
            "category": "project",
            "created_at": "2025-01-15T10:30:00.000Z",
            "key": "test/float",
            "relationships": [],
            "source": "user",
            "value": {"score": 1.5}
        }"#;
        let input: Value = serde_json::from_str(raw).unwrap();
        assert!(matches!(
            MemoryObject::from_input(&input),
            Err(CanonError::FloatProhibited { .. })
        ));
    }

    #[test]
    fn test_from_input_rejects_out_of_range_integer_in_value() {
        let raw = r#"{
            "_helios_schema_version": "1",
            "category": "project",
            "created_at": "2025-01-15T10:30:00.000Z",
            "key": "test/range",
            "relationships": [],
            "source": "user",
            "value": [9223372036854775808]
        }"#;
        let input: Value = serde_json::from_str(raw).unwrap();
        assert!(matches!(
            MemoryObject::from_input(&input),
            Err(CanonError::IntegerOutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_input_operational_floats_not_subject_to_ingest_rules() {
        // confidence is a float by nature; it sits outside the integrity
        // boundary and must not trip the float prohibition.
        let raw = r#"{
            "_helios_schema_version": "1",
            "category": "project",
            "created_at": "2025-01-15T10:30:00.000Z",
            "key": "test/confidence",
            "relationships": [],
            "source": "user",
            "value": "v",
            "confidence": 0.25
        }"#;
        let input: Value = serde_json::from_str(raw).unwrap();
        let obj = MemoryObject::from_input(&input).unwrap();
        assert!((obj.confidence - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_from_input_empty_relationships_stay_empty() {
        let mut input = base_input();
        input
            .as_object_mut()
            .unwrap()
            .insert("relationships".into(), json!([]));
        let obj = MemoryObject::from_input(&input).unwrap();
        assert!(obj.relationships.is_empty());
    }

    #[test]
    fn test_from_input_missing_relationships_become_empty() {
        let mut input = base_input();
        input.as_object_mut().unwrap().remove("relationships");
        let obj = MemoryObject::from_input(&input).unwrap();
        assert!(obj.relationships.is_empty());
    }

    #[test]
    fn test_from_input_rejects_malformed_relationship() {
        let mut input = base_input();
        input
            .as_object_mut()
            .unwrap()
            .insert("relationships".into(), json!([{"key": "a"}]));
        assert!(matches!(
            MemoryObject::from_input(&input),
            Err(CanonError::MalformedInput(_))
        ));

        let mut input = base_input();
        input
            .as_object_mut()
            .unwrap()
            .insert("relationships".into(), json!(["not-an-object"]));
        assert!(matches!(
            MemoryObject::from_input(&input),
            Err(CanonError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_relationship_serde_wire_name() {
        let rel = Relationship::new("project/helios", "related_to");
        let encoded = serde_json::to_string(&rel).unwrap();
        assert!(encoded.contains("\"type\":\"related_to\""));
        let decoded: Relationship =
            serde_json::from_str(r#"{"key": "a", "type": "b"}"#).unwrap();
        assert_eq!(decoded, Relationship::new("a", "b"));
    }
}
