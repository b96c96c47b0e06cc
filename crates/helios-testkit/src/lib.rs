//! # Helios Testkit
//!
//! Testing utilities for Helios Core.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: known memory objects with frozen content hashes,
//!   the in-code counterpart of the distributed `vectors/vectors.json`
//! - **Generators**: proptest strategies for property-based testing
//! - **Fixtures**: builders for setting up test objects
//!
//! ## Golden vectors
//!
//! ```
//! use helios_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, digest) in verify_all_vectors() {
//!     assert!(matches, "{name} drifted to {digest}");
//! }
//! ```
//!
//! ## Fixtures
//!
//! ```
//! use helios_core::content_hash;
//! use helios_testkit::fixtures::ObjectBuilder;
//!
//! let object = ObjectBuilder::new()
//!     .key("test/example")
//!     .value("some content")
//!     .build();
//! assert_eq!(content_hash(&object).unwrap().len(), 64);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{basic_object, ObjectBuilder};
pub use generators::{object_from_params, MemoryObjectParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
