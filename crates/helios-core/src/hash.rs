//! The content-hash pipeline.
//!
//! `content_hash = lowercase_hex(sha256(canonical_bytes(field_map)))` where
//! the field map holds the schema version plus the six semantic fields of a
//! memory object, each normalized first.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::canon::{self, SCHEMA_VERSION, SCHEMA_VERSION_FIELD};
use crate::error::CanonError;
use crate::object::{HashInput, MemoryObject};

/// Compute the deterministic content hash of a memory object.
///
/// Steps:
///  1. Project to the six hashed fields ([`HashInput`])
///  2. Normalize `created_at` to millisecond-precision UTC
///  3. Sort relationships by key, then type
///  4. NFC-normalize every hashed string (including a string `value`)
///  5. Build the explicit seven-key field map
///  6. Canonicalize, SHA-256, lowercase hex
///
/// The function is pure: the same object always yields the same 64-character
/// string, and objects differing only in operational fields yield the same
/// digest.
pub fn content_hash(obj: &MemoryObject) -> Result<String, CanonError> {
    let input = HashInput::from_object(obj);

    let created_at = canon::normalize_timestamp(&input.created_at)?;

    // Sorted over the submitted key/type scalars; each entry then becomes an
    // explicit two-key map with NFC-normalized strings.
    let sorted = canon::sort_relationships(&input.relationships);
    let relationships: Vec<Value> = sorted
        .iter()
        .map(|r| {
            canon::relationship_to_map(
                &canon::normalize_string(&r.key),
                &canon::normalize_string(&r.kind),
            )
        })
        .collect();

    let value = match &input.value {
        Value::String(s) => Value::String(canon::normalize_string(s)),
        other => other.clone(),
    };

    let mut fields = Map::with_capacity(7);
    fields.insert(
        SCHEMA_VERSION_FIELD.to_string(),
        Value::String(SCHEMA_VERSION.to_string()),
    );
    fields.insert(
        "category".to_string(),
        Value::String(canon::normalize_string(&input.category)),
    );
    fields.insert("created_at".to_string(), Value::String(created_at));
    fields.insert(
        "key".to_string(),
        Value::String(canon::normalize_string(&input.key)),
    );
    fields.insert("relationships".to_string(), Value::Array(relationships));
    fields.insert(
        "source".to_string(),
        Value::String(canon::normalize_string(&input.source)),
    );
    fields.insert("value".to_string(), value);

    let canonical = canon::canonical_bytes(&Value::Object(fields));
    let digest = Sha256::digest(&canonical);
    Ok(hex::encode(digest))
}
