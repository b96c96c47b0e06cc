//! Canonical serialization and normalization primitives.
//!
//! Every byte this module emits is a wire-compatibility contract:
//! - Map keys sorted by byte comparison over their UTF-8 encoding
//! - Compact separators, no whitespace anywhere
//! - Raw UTF-8 preserved (non-ASCII is never escaped to `\uXXXX`)
//! - Numeric literals re-emitted as their preserved source text
//!
//! Normalization (NFC, timestamp shape) happens on INPUT values before
//! serialization, never on output bytes.
//!
//! **CRITICAL**: This encoding is FROZEN. Changes break every existing
//! content hash.

use std::fmt::Write as _;

use serde_json::{Map, Number, Value};
use unicode_normalization::UnicodeNormalization;

use crate::error::CanonError;
use crate::object::Relationship;

/// Field name carrying the schema version, both in external input and in
/// the canonical field map.
pub const SCHEMA_VERSION_FIELD: &str = "_helios_schema_version";

/// The only schema version this crate understands.
pub const SCHEMA_VERSION: &str = "1";

/// Apply Unicode NFC normalization to a string value.
///
/// Must be called on every string that participates in the hash input
/// before serialization.
pub fn normalize_string(s: &str) -> String {
    s.nfc().collect()
}

/// Validate and re-emit an ISO 8601 UTC timestamp as
/// `YYYY-MM-DDTHH:MM:SS.sssZ` with exactly three fractional digits.
///
/// Checks, in order: the literal `Z` suffix, the presence of a fractional
/// `.`, exactly three digits between `.` and `Z`, and finally a strict
/// fixed-format parse. Variable-precision forms (`.1`, `.12`, `.1234`) and
/// offsets other than `Z` are rejected.
pub fn normalize_timestamp(s: &str) -> Result<String, CanonError> {
    if !s.ends_with('Z') {
        return Err(CanonError::TimestampNonUtc { got: s.to_string() });
    }
    let Some(dot) = s.rfind('.') else {
        return Err(CanonError::TimestampInvalidPrecision { got: s.to_string() });
    };
    let frac = &s[dot + 1..s.len() - 1];
    if frac.len() != 3 {
        return Err(CanonError::TimestampInvalidPrecision { got: s.to_string() });
    }

    // The canonical shape is exactly 24 bytes; chrono validates the
    // calendar fields.
    if s.len() != 24 {
        return Err(CanonError::TimestampInvalidFormat { got: s.to_string() });
    }
    let parsed = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.3fZ")
        .map_err(|_| CanonError::TimestampInvalidFormat { got: s.to_string() })?;

    Ok(parsed.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}

/// Produce the canonical JSON byte sequence for a value.
///
/// Maps emit their pairs in ascending key order, arrays keep insertion
/// order (sorting is an explicit pre-pass for relationships only), and
/// strings follow the minimal escape policy of [`emit_string`].
pub fn canonical_bytes(value: &Value) -> Vec<u8> {
    let mut out = String::new();
    emit_value(value, &mut out);
    out.into_bytes()
}

fn emit_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => emit_number(n, out),
        Value::String(s) => emit_string(s, out),
        Value::Array(arr) => emit_array(arr, out),
        Value::Object(map) => emit_object(map, out),
    }
}

/// Numbers decoded from JSON keep their source text (the parser is
/// number-preserving), so this emission is verbatim. Numbers constructed
/// natively render in shortest form: plain decimal for integers, shortest
/// round-trip for floats.
fn emit_number(n: &Number, out: &mut String) {
    let _ = write!(out, "{n}");
}

/// Emit a JSON string with raw UTF-8 preserved.
///
/// Escapes: `\"`, `\\`, the short forms `\b \f \n \r \t`, and `\u00xx`
/// (lowercase hex) for remaining control characters below U+0020. Every
/// other scalar value, including all non-ASCII, is emitted as raw UTF-8.
fn emit_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn emit_array(arr: &[Value], out: &mut String) {
    out.push('[');
    for (i, item) in arr.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        emit_value(item, out);
    }
    out.push(']');
}

/// Emit a map with keys in ascending order by UTF-8 byte value.
fn emit_object(map: &Map<String, Value>, out: &mut String) {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    out.push('{');
    for (i, key) in keys.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        emit_string(key, out);
        out.push(':');
        emit_value(&map[key.as_str()], out);
    }
    out.push('}');
}

/// Sort relationships by `key` ascending, `type` as tie-breaker, comparing
/// Unicode scalar values.
///
/// The sort is stable: entries with an identical (key, type) pair keep
/// their input order. Ordering compares the submitted strings; NFC follows
/// in the pipeline.
pub fn sort_relationships(rels: &[Relationship]) -> Vec<Relationship> {
    let mut sorted = rels.to_vec();
    sorted.sort_by(|a, b| a.key.cmp(&b.key).then_with(|| a.kind.cmp(&b.kind)));
    sorted
}

/// Build the explicit two-key map for a relationship.
///
/// Record field order is never trusted; the serializer sorts whatever keys
/// it is handed.
pub fn relationship_to_map(key: &str, kind: &str) -> Value {
    let mut map = Map::with_capacity(2);
    map.insert("key".to_string(), Value::String(key.to_string()));
    map.insert("type".to_string(), Value::String(kind.to_string()));
    Value::Object(map)
}

/// Check that `_helios_schema_version` is present and equal to the string
/// `"1"`.
pub fn validate_schema_version(input: &Map<String, Value>) -> Result<(), CanonError> {
    let Some(version) = input.get(SCHEMA_VERSION_FIELD) else {
        return Err(CanonError::SchemaVersionMissing);
    };
    match version.as_str() {
        Some(SCHEMA_VERSION) => Ok(()),
        _ => Err(CanonError::SchemaVersionInvalid {
            got: version.to_string(),
        }),
    }
}

/// Recursively validate a decoded JSON value against the ingest rules:
/// no nulls, no numeric literals with a decimal point or exponent, and
/// integers within the signed 64-bit range.
pub fn validate_ingest_value(value: &Value) -> Result<(), CanonError> {
    validate_ingest(value, "")
}

pub(crate) fn validate_ingest(value: &Value, path: &str) -> Result<(), CanonError> {
    match value {
        Value::Null => Err(CanonError::NullProhibited {
            path: path.to_string(),
        }),
        Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => validate_number(n, path),
        Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate() {
                validate_ingest(item, &format!("{path}[{i}]"))?;
            }
            Ok(())
        }
        Value::Object(map) => {
            for (key, child) in map {
                validate_ingest(child, &format!("{path}.{key}"))?;
            }
            Ok(())
        }
    }
}

fn validate_number(n: &Number, path: &str) -> Result<(), CanonError> {
    let literal = n.to_string();
    if literal.contains('.') || literal.contains('e') || literal.contains('E') {
        return Err(CanonError::FloatProhibited {
            literal,
            path: path.to_string(),
        });
    }
    if n.as_i64().is_none() {
        return Err(CanonError::IntegerOutOfRange {
            literal,
            path: path.to_string(),
        });
    }
    Ok(())
}
