//! Entity storage interface.

use async_trait::async_trait;

use crate::model::RecordMeta;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("entity has no identifier")]
    MissingId,

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// An entity the repository can store.
///
/// Concrete entities embed a [`RecordMeta`] and expose it here; the
/// repository reads the identifier through it and refreshes `updated_at`
/// on save. The `Clone` bound lets the store keep the canonical copy and
/// hand out snapshots.
pub trait Storable: Clone + Send + Sync {
    /// Shared record attributes.
    fn record(&self) -> &RecordMeta;

    /// Mutable record attributes, used for the timestamp refresh on save.
    fn record_mut(&mut self) -> &mut RecordMeta;

    /// Identifier the entity is stored under.
    fn id(&self) -> &str {
        &self.record().id
    }
}

/// Keyed entity storage.
///
/// The repository owns the canonical copy of each entity; lookups and
/// listings hand out clones, so a returned value is a stable snapshot that
/// later store mutation cannot change.
#[async_trait]
pub trait Repository<T: Storable>: Send + Sync {
    /// Fetch the entity stored under `id`.
    ///
    /// Absence is `Ok(None)`, never an error.
    async fn get_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Insert or overwrite the entry for the entity's identifier.
    ///
    /// Refreshes the entity's `updated_at` in place before storing, so the
    /// caller's copy and the stored copy agree on the timestamp. Fails with
    /// [`StoreError::MissingId`] if the identifier is empty.
    async fn save(&self, entity: &mut T) -> Result<()>;

    /// Remove the entry for `id` if present.
    ///
    /// Deleting an absent id is a silent no-op.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Snapshot of all stored entities, in no particular order.
    async fn list_all(&self) -> Result<Vec<T>>;
}
