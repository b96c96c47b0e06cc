//! Golden test vectors for deterministic verification.
//!
//! These vectors are the in-code counterpart of the distributed
//! `vectors/vectors.json`: the same inputs, the same frozen digests. Every
//! implementation of the content hash must reproduce them byte-for-byte.

use helios_core::{content_hash, MemoryObject, Relationship};
use serde_json::{json, Value};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Vector identifier.
    pub name: &'static str,
    /// Human-readable label.
    pub description: &'static str,
    /// The memory object to hash.
    pub object: MemoryObject,
    /// Frozen expected digest (64 lowercase hex chars).
    pub expected_content_hash: &'static str,
}

fn vector_object(key: &str, value: Value) -> MemoryObject {
    MemoryObject {
        category: "project".into(),
        created_at: "2025-01-15T10:30:00.000Z".into(),
        key: key.into(),
        relationships: vec![Relationship::new("project/helios", "related_to")],
        source: "user".into(),
        value,
        ..Default::default()
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "basic",
            description: "Representative memory object; operational fields ignored",
            object: {
                let mut object = vector_object(
                    "test/basic_memory",
                    "This is a test memory for hash verification.".into(),
                );
                // Operational fields are set to prove the integrity
                // boundary: they must not move the digest.
                object.updated_at = "2025-01-15T12:00:00.000Z".into();
                object.version = 3;
                object.access_count = 42;
                object.last_accessed = "2025-01-16T08:00:00.000Z".into();
                object.confidence = 0.95;
                object
            },
            expected_content_hash:
                "c3262407645dcdbd1cede212fa0448a3adb2f915f762540c32e0050bbf65e781",
        },
        GoldenVector {
            name: "key_ordering",
            description: "Source document lists fields in reverse order",
            object: vector_object(
                "test/key_ordering",
                "Field order in the source document must not matter.".into(),
            ),
            expected_content_hash:
                "9a012998d3510b893c07492354ab24030b35eeedb7200a1fa70f71b7ed424108",
        },
        GoldenVector {
            name: "unicode_normalization",
            description: "Value supplied in NFD form; hash must match the NFC form",
            object: vector_object("test/unicode_memory", "cafe\u{301}".into()),
            expected_content_hash:
                "15fcdecadf74e166314ce0bca4e3e9b9970e110ab34023cc195fa7da921f1310",
        },
        GoldenVector {
            name: "null_value",
            description: "Null value serializes as null and differs from the string \"null\"",
            object: vector_object("test/null_value", Value::Null),
            expected_content_hash:
                "8e7ee9ae75c98bad007b2b510ae889295ca493a9e3bd5d599c9bd1c2b108c200",
        },
        GoldenVector {
            name: "relationship_sorting",
            description: "Relationships supplied out of order; digest matches canonical order",
            object: {
                let mut object = vector_object(
                    "test/relationship_sorting",
                    "Relationships are sorted before hashing.".into(),
                );
                object.relationships = vec![
                    Relationship::new("project/zeta", "related_to"),
                    Relationship::new("project/alpha", "related_to"),
                    Relationship::new("project/alpha", "depends_on"),
                ];
                object
            },
            expected_content_hash:
                "a0eec95a6fbf551c6989defd2bbd893cc33440f6fde928da371a92aa923bcf57",
        },
    ]
}

/// Verify all golden vectors against their frozen digests.
///
/// Returns `(name, matches, computed_digest)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let digest = content_hash(&v.object).expect("golden vector must hash");
            let matches = digest == v.expected_content_hash;
            (v.name.to_string(), matches, digest)
        })
        .collect()
}

/// Build the distributable vectors-file envelope from the golden vectors.
pub fn vectors_file_value() -> Value {
    let vectors: Vec<Value> = all_vectors()
        .iter()
        .map(|v| {
            let mut input = json!({
                "_helios_schema_version": "1",
                "category": v.object.category,
                "created_at": v.object.created_at,
                "key": v.object.key,
                "relationships": v.object
                    .relationships
                    .iter()
                    .map(|r| json!({"key": r.key, "type": r.kind}))
                    .collect::<Vec<_>>(),
                "source": v.object.source,
                "value": v.object.value,
            });
            if !v.object.updated_at.is_empty() {
                let fields = input.as_object_mut().unwrap();
                fields.insert("updated_at".into(), json!(v.object.updated_at));
                fields.insert("version".into(), json!(v.object.version));
                fields.insert("access_count".into(), json!(v.object.access_count));
                fields.insert("last_accessed".into(), json!(v.object.last_accessed));
                fields.insert("confidence".into(), json!(v.object.confidence));
            }
            json!({
                "name": v.name,
                "description": v.description,
                "vector_type": "positive",
                "expected_outcome": "accept",
                "input": input,
                "expected_content_hash": v.expected_content_hash,
            })
        })
        .collect();

    json!({
        "spec_version": "helios-canonical-serialization-v1",
        "vectors_version": "4",
        "description": "Conformance vectors for the Helios content hash. Every implementation must reproduce these digests byte-for-byte.",
        "vectors": vectors,
    })
}
