//! Thread-safe in-memory repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::interfaces::repository::{Repository, Result, Storable, StoreError};

/// In-memory keyed store.
///
/// A single mutex guards the map and is held for the full duration of every
/// operation, so operations serialize against each other: concurrent callers
/// can neither lose updates nor observe a half-applied mutation. There are
/// no cross-operation transactions; each call is its own critical section.
pub struct InMemoryRepository<T> {
    entries: Mutex<HashMap<String, T>>,
}

impl<T> InMemoryRepository<T> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Storable + 'static> Repository<T> for InMemoryRepository<T> {
    async fn get_by_id(&self, id: &str) -> Result<Option<T>> {
        let entries = self.entries.lock().await;
        Ok(entries.get(id).cloned())
    }

    async fn save(&self, entity: &mut T) -> Result<()> {
        if entity.id().is_empty() {
            return Err(StoreError::MissingId);
        }
        let mut entries = self.entries.lock().await;
        entity.record_mut().updated_at = Utc::now();
        entries.insert(entity.id().to_string(), entity.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.remove(id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<T>> {
        let entries = self.entries.lock().await;
        Ok(entries.values().cloned().collect())
    }
}
