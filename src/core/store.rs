//! Store trait for keyed entity collections

use crate::core::Entity;
use anyhow::Result;
use async_trait::async_trait;

/// Storage trait for a single entity collection
///
/// Implementations keep rows addressable by their string id and hand
/// listings back in insertion order. Services only talk to this trait,
/// so tests can swap the seeded dataset for purpose-built fixtures.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// Insert a row, replacing any previous row with the same id
    async fn insert(&self, entity: T) -> Result<T>;

    /// Get a row by id
    async fn get(&self, id: &str) -> Result<Option<T>>;

    /// List all rows in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Replace an existing row in place
    ///
    /// Returns the stored row, or None when no row has this id. The row
    /// keeps its original position in listings.
    async fn replace(&self, entity: T) -> Result<Option<T>>;
}
