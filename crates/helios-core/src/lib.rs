//! # Helios Core
//!
//! Deterministic content hashing for structured memory objects.
//!
//! Any two conformant implementations, in any language, produce
//! byte-identical canonical serializations and byte-identical SHA-256
//! digests for the same logical input. The hash is an integrity
//! fingerprint: it covers the six semantic fields of a memory object and is
//! immune to changes in operational metadata.
//!
//! ## Pipeline
//!
//! [`content_hash`] projects a [`MemoryObject`] onto its six hashed fields,
//! normalizes them (Unicode NFC, millisecond-precision UTC timestamp,
//! sorted relationships), serializes through the canonical JSON emitter in
//! [`canon`], and hex-encodes the SHA-256 digest.
//!
//! ## Invariants
//!
//! 1. **Determinism**: hashing the same object twice yields the same
//!    string, byte for byte.
//! 2. **Integrity boundary**: objects differing only in operational fields
//!    hash identically; objects differing in any hashed field do not.
//! 3. **Frozen bytes**: the canonical encoding never changes; any change
//!    would break every existing digest.
//!
//! ## Example
//!
//! ```
//! use helios_core::{content_hash, MemoryObject, Relationship};
//!
//! let object = MemoryObject {
//!     category: "project".into(),
//!     created_at: "2025-01-15T10:30:00.000Z".into(),
//!     key: "test/basic_memory".into(),
//!     relationships: vec![Relationship::new("project/helios", "related_to")],
//!     source: "user".into(),
//!     value: "This is a test memory for hash verification.".into(),
//!     ..Default::default()
//! };
//!
//! let digest = content_hash(&object).unwrap();
//! assert_eq!(digest.len(), 64);
//! ```

pub mod canon;
pub mod error;
pub mod hash;
pub mod object;
pub mod verify;

pub use canon::{
    canonical_bytes, normalize_string, normalize_timestamp, relationship_to_map,
    sort_relationships, validate_ingest_value, validate_schema_version, SCHEMA_VERSION,
    SCHEMA_VERSION_FIELD,
};
pub use error::{CanonError, VerifyError};
pub use hash::content_hash;
pub use object::{HashInput, MemoryObject, Relationship};
pub use verify::{verify_vectors, TestVector, VectorsFile, VerifyReport, VerifyResult};
