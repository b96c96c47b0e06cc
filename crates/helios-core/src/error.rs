//! Error types for canonicalization, hashing, and vector verification.
//!
//! Canonicalization failures carry stable `CANON_ERR_*` identifiers in their
//! display strings so that every implementation of the hash contract reports
//! the same failure the same way.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the canonicalization and hash pipeline.
#[derive(Debug, Error)]
pub enum CanonError {
    /// A null was encountered at a position where ingest forbids it.
    #[error("CANON_ERR_NULL_PROHIBITED: null value at {path}")]
    NullProhibited { path: String },

    /// A numeric literal with a decimal point or exponent was encountered.
    #[error("CANON_ERR_FLOAT_PROHIBITED: numeric value {literal} at {path} contains a decimal point or exponent")]
    FloatProhibited { literal: String, path: String },

    /// An integer literal outside the signed 64-bit range.
    #[error("CANON_ERR_INTEGER_OUT_OF_RANGE: value {literal} at {path} exceeds the signed 64-bit range")]
    IntegerOutOfRange { literal: String, path: String },

    /// The `_helios_schema_version` field is absent.
    #[error("CANON_ERR_SCHEMA_VERSION_MISSING: _helios_schema_version field is required")]
    SchemaVersionMissing,

    /// The `_helios_schema_version` field is not the string `"1"`.
    #[error("CANON_ERR_SCHEMA_VERSION_INVALID: _helios_schema_version must be the string \"1\", got {got}")]
    SchemaVersionInvalid { got: String },

    /// Timestamp does not end in `Z`.
    #[error("CANON_ERR_TIMESTAMP_NON_UTC: timestamp must end in Z, got: {got}")]
    TimestampNonUtc { got: String },

    /// Timestamp lacks exactly three fractional digits.
    #[error("CANON_ERR_TIMESTAMP_INVALID_PRECISION: timestamp must have exactly 3 fractional digits, got: {got}")]
    TimestampInvalidPrecision { got: String },

    /// Timestamp has the right suffix and precision but is not a valid
    /// date-time under the canonical format.
    #[error("invalid timestamp format: {got}")]
    TimestampInvalidFormat { got: String },

    /// External input does not have the shape of a memory object.
    #[error("CANON_ERR_MALFORMED_INPUT: {0}")]
    MalformedInput(String),
}

/// Errors raised by the conformance-vector verifier.
///
/// Per-vector hash mismatches are not errors; they are accumulated into the
/// [`VerifyReport`](crate::verify::VerifyReport) so a single run surfaces
/// every failing vector.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The vectors file could not be read.
    #[error("failed to read vectors file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The vectors file is not valid JSON or not a vectors document.
    #[error("failed to parse vectors file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A vector's input could not be ingested or hashed.
    #[error("vector {name:?}: {source}")]
    Vector { name: String, source: CanonError },
}
