//! In-memory implementation of EntityStore for testing and development

use crate::core::error::StoreError;
use crate::core::{Entity, EntityStore};
use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// In-memory entity store implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access
/// and an IndexMap so listings come back in insertion order.
#[derive(Clone)]
pub struct InMemoryStore<T: Entity> {
    rows: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Entity> InMemoryStore<T> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a store pre-populated with the given rows
    pub fn with_rows(rows: impl IntoIterator<Item = T>) -> Self {
        let rows: IndexMap<String, T> = rows
            .into_iter()
            .map(|row| (row.id().to_string(), row))
            .collect();

        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    /// Number of stored rows
    pub fn len(&self) -> Result<usize> {
        let rows = self.rows.read().map_err(|_| StoreError::LockPoisoned {
            access: "read",
            resource: T::resource_name(),
        })?;

        Ok(rows.len())
    }

    /// Whether the store holds no rows
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    async fn insert(&self, entity: T) -> Result<T> {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned {
            access: "write",
            resource: T::resource_name(),
        })?;

        rows.insert(entity.id().to_string(), entity.clone());

        Ok(entity)
    }

    async fn get(&self, id: &str) -> Result<Option<T>> {
        let rows = self.rows.read().map_err(|_| StoreError::LockPoisoned {
            access: "read",
            resource: T::resource_name(),
        })?;

        Ok(rows.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let rows = self.rows.read().map_err(|_| StoreError::LockPoisoned {
            access: "read",
            resource: T::resource_name(),
        })?;

        Ok(rows.values().cloned().collect())
    }

    async fn replace(&self, entity: T) -> Result<Option<T>> {
        let mut rows = self.rows.write().map_err(|_| StoreError::LockPoisoned {
            access: "write",
            resource: T::resource_name(),
        })?;

        if !rows.contains_key(entity.id()) {
            return Ok(None);
        }

        // IndexMap keeps the original position when the key already exists
        rows.insert(entity.id().to_string(), entity.clone());

        Ok(Some(entity))
    }
}
