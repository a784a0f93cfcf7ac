//! Critical Collection Invariants:
//!
//! 1. Collections do NOT own favorites
//! 2. A favorite can belong to multiple collections
//! 3. Member ids are a set (adding twice is a no-op)
//! 4. An empty collection stays valid
//! 5. Removing a favorite leaves its id in member sets; reads filter it out
//! 6. Collection name cannot be empty

pub mod entity;

pub use entity::{default_collections, Collection};

use crate::domain::{DomainError, DomainResult};

/// Validates Collection invariants
pub fn validate_collection(collection: &Collection) -> DomainResult<()> {
    if collection.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Collection name cannot be empty".to_string(),
        ));
    }
    if collection.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Collection id cannot be empty".to_string(),
        ));
    }
    Ok(())
}
