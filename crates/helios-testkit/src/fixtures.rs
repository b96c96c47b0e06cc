//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use helios_core::{MemoryObject, Relationship};
use serde_json::Value;

/// The representative object used across the suite; matches the `basic`
/// golden vector.
pub fn basic_object() -> MemoryObject {
    ObjectBuilder::new().build()
}

/// Builder for memory objects in tests.
///
/// Starts from the `basic` shape; override what the test cares about.
pub struct ObjectBuilder {
    object: MemoryObject,
}

impl ObjectBuilder {
    pub fn new() -> Self {
        Self {
            object: MemoryObject {
                category: "project".into(),
                created_at: "2025-01-15T10:30:00.000Z".into(),
                key: "test/basic_memory".into(),
                relationships: vec![Relationship::new("project/helios", "related_to")],
                source: "user".into(),
                value: "This is a test memory for hash verification.".into(),
                ..Default::default()
            },
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.object.category = category.into();
        self
    }

    pub fn created_at(mut self, created_at: impl Into<String>) -> Self {
        self.object.created_at = created_at.into();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.object.key = key.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.object.source = source.into();
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.object.value = value.into();
        self
    }

    /// Replace all relationships.
    pub fn relationships(mut self, relationships: Vec<Relationship>) -> Self {
        self.object.relationships = relationships;
        self
    }

    /// Append a single relationship.
    pub fn relationship(mut self, key: impl Into<String>, kind: impl Into<String>) -> Self {
        self.object.relationships.push(Relationship::new(key, kind));
        self
    }

    pub fn version(mut self, version: i64) -> Self {
        self.object.version = version;
        self
    }

    pub fn access_count(mut self, access_count: i64) -> Self {
        self.object.access_count = access_count;
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.object.confidence = confidence;
        self
    }

    pub fn updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.object.updated_at = updated_at.into();
        self
    }

    pub fn last_accessed(mut self, last_accessed: impl Into<String>) -> Self {
        self.object.last_accessed = last_accessed.into();
        self
    }

    pub fn build(self) -> MemoryObject {
        self.object
    }
}

impl Default for ObjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}
