//! Conformance-vector verification.
//!
//! A vectors file freezes inputs together with their expected content
//! hashes. Verifying the file proves that this implementation produces the
//! same canonical bytes, and therefore the same digests, as every other
//! conformant implementation.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::VerifyError;
use crate::hash::content_hash;
use crate::object::MemoryObject;

/// A single vector from a conformance file.
///
/// Unknown fields (spec version, outcome labels) are tolerated and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TestVector {
    /// Vector identifier.
    #[serde(alias = "vector_id")]
    pub name: String,
    /// Human-readable label.
    #[serde(default)]
    pub description: String,
    /// The full memory-object JSON. Numeric literals keep their source
    /// text through decoding.
    pub input: Value,
    /// Frozen expected digest, 64 lowercase hex characters.
    #[serde(alias = "hash")]
    pub expected_content_hash: String,
}

/// Top-level shape of a vectors file.
#[derive(Debug, Deserialize)]
pub struct VectorsFile {
    pub vectors: Vec<TestVector>,
}

/// Outcome of verifying one vector.
#[derive(Debug, Clone)]
pub struct VerifyResult {
    pub name: String,
    pub expected: String,
    pub got: String,
    pub pass: bool,
}

/// Per-vector results plus the aggregate signal.
#[derive(Debug)]
pub struct VerifyReport {
    pub results: Vec<VerifyResult>,
}

impl VerifyReport {
    /// True when every vector matched its frozen digest.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.pass)
    }

    /// Number of mismatched vectors.
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| !r.pass).count()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Load a vectors file, hash every input, and compare against the frozen
/// digests.
///
/// Mismatches are accumulated into the report so one run surfaces every
/// failing vector. Hard failures abort: an unreadable file, a parse error,
/// or an input that cannot be ingested or hashed.
pub fn verify_vectors(path: &Path) -> Result<VerifyReport, VerifyError> {
    let data = fs::read_to_string(path).map_err(|source| VerifyError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: VectorsFile = serde_json::from_str(&data)?;

    let mut results = Vec::with_capacity(file.vectors.len());
    for vector in &file.vectors {
        let object = MemoryObject::from_input(&vector.input).map_err(|source| {
            VerifyError::Vector {
                name: vector.name.clone(),
                source,
            }
        })?;
        let got = content_hash(&object).map_err(|source| VerifyError::Vector {
            name: vector.name.clone(),
            source,
        })?;

        let pass = got == vector.expected_content_hash;
        results.push(VerifyResult {
            name: vector.name.clone(),
            expected: vector.expected_content_hash.clone(),
            got,
            pass,
        });
    }

    Ok(VerifyReport { results })
}
