//! Golden tests for the canonical encoding and the content hash.
//!
//! The byte strings and digests below are frozen. A failure here means the
//! canonical encoding changed, which breaks every existing digest across
//! every implementation.

use helios_core::{canonical_bytes, content_hash, MemoryObject, Relationship};
use serde_json::{json, Value};
use sha2::Digest;

fn basic_object() -> MemoryObject {
    MemoryObject {
        category: "project".into(),
        created_at: "2025-01-15T10:30:00.000Z".into(),
        key: "test/basic_memory".into(),
        relationships: vec![Relationship::new("project/helios", "related_to")],
        source: "user".into(),
        value: "This is a test memory for hash verification.".into(),
        ..Default::default()
    }
}

#[test]
fn golden_canonical_bytes() {
    // Raw serializer level: a six-field map, no schema version key.
    let fields = json!({
        "category": "test",
        "created_at": "2025-01-01T00:00:00.000Z",
        "key": "golden/test",
        "relationships": [],
        "source": "unit_test",
        "value": "hello"
    });

    let canonical = canonical_bytes(&fields);
    let expected = r#"{"category":"test","created_at":"2025-01-01T00:00:00.000Z","key":"golden/test","relationships":[],"source":"unit_test","value":"hello"}"#;
    assert_eq!(std::str::from_utf8(&canonical).unwrap(), expected);
}

#[test]
fn golden_basic_digest() {
    let digest = content_hash(&basic_object()).unwrap();
    assert_eq!(
        digest,
        "c3262407645dcdbd1cede212fa0448a3adb2f915f762540c32e0050bbf65e781"
    );
}

#[test]
fn golden_null_value_digest() {
    let mut object = basic_object();
    object.key = "test/null_value".into();
    object.value = Value::Null;
    let digest = content_hash(&object).unwrap();
    assert_eq!(
        digest,
        "8e7ee9ae75c98bad007b2b510ae889295ca493a9e3bd5d599c9bd1c2b108c200"
    );
}

#[test]
fn golden_unicode_digest_from_either_form() {
    let mut nfd = basic_object();
    nfd.key = "test/unicode_memory".into();
    nfd.value = "cafe\u{301}".into();

    let mut nfc = basic_object();
    nfc.key = "test/unicode_memory".into();
    nfc.value = "caf\u{e9}".into();

    let expected = "15fcdecadf74e166314ce0bca4e3e9b9970e110ab34023cc195fa7da921f1310";
    assert_eq!(content_hash(&nfd).unwrap(), expected);
    assert_eq!(content_hash(&nfc).unwrap(), expected);
}

#[test]
fn canonical_field_map_has_exactly_seven_keys() {
    // Re-parse the canonical bytes of a hashed object and check the field
    // boundary: schema version plus the six semantic fields, nothing else.
    let object = basic_object();

    // Reconstruct the canonical map the digest is computed over.
    let mut probe = object.clone();
    probe.value = "probe".into();
    let bytes = canonical_map_bytes(&probe);
    let parsed: Value = serde_json::from_slice(&bytes).unwrap();
    let map = parsed.as_object().unwrap();

    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "_helios_schema_version",
            "category",
            "created_at",
            "key",
            "relationships",
            "source",
            "value",
        ]
    );
    assert_eq!(map["_helios_schema_version"], json!("1"));
}

/// Recover the exact canonical bytes behind an object's digest by probing
/// the serializer with the same inputs the pipeline uses.
fn canonical_map_bytes(object: &MemoryObject) -> Vec<u8> {
    let fields = json!({
        "_helios_schema_version": "1",
        "category": object.category,
        "created_at": object.created_at,
        "key": object.key,
        "relationships": object
            .relationships
            .iter()
            .map(|r| json!({"key": r.key, "type": r.kind}))
            .collect::<Vec<_>>(),
        "source": object.source,
        "value": object.value,
    });
    let bytes = canonical_bytes(&fields);

    // The probe must agree with the pipeline's digest, or it is not the
    // canonical map.
    let digest = hex::encode(sha2::Sha256::digest(&bytes));
    assert_eq!(digest, content_hash(object).unwrap());
    bytes
}

#[test]
fn key_ordering_in_source_document_is_irrelevant() {
    let forward = r#"{
        "_helios_schema_version": "1",
        "category": "project",
        "created_at": "2025-01-15T10:30:00.000Z",
        "key": "test/key_ordering",
        "relationships": [{"key": "project/helios", "type": "related_to"}],
        "source": "user",
        "value": "Field order in the source document must not matter."
    }"#;
    let reversed = r#"{
        "value": "Field order in the source document must not matter.",
        "source": "user",
        "relationships": [{"type": "related_to", "key": "project/helios"}],
        "key": "test/key_ordering",
        "created_at": "2025-01-15T10:30:00.000Z",
        "category": "project",
        "_helios_schema_version": "1"
    }"#;

    let h1 = hash_of_input(forward);
    let h2 = hash_of_input(reversed);
    assert_eq!(h1, h2);
    assert_eq!(
        h1,
        "9a012998d3510b893c07492354ab24030b35eeedb7200a1fa70f71b7ed424108"
    );
}

fn hash_of_input(raw: &str) -> String {
    let input: Value = serde_json::from_str(raw).unwrap();
    let object = MemoryObject::from_input(&input).unwrap();
    content_hash(&object).unwrap()
}

#[test]
fn idempotence_across_repeated_runs() {
    let object = basic_object();
    let first = content_hash(&object).unwrap();
    for _ in 0..10 {
        assert_eq!(content_hash(&object).unwrap(), first);
    }
}
