//! Event observation interface.

use std::sync::Arc;

use async_trait::async_trait;

use crate::bus::DomainEvent;

/// Result type for observer callbacks.
pub type Result<T> = std::result::Result<T, ObserverError>;

/// Errors from observer callbacks.
#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    #[error("observer processing failed: {0}")]
    Failed(String),
}

/// A listener attached to the event bus.
///
/// `update` takes `&self` rather than `&mut self`; observers that keep
/// mutable state should use interior mutability (`RwLock`, `Mutex`,
/// atomics).
#[async_trait]
pub trait Observer: Send + Sync {
    /// Name of this observer, used in logs and failure reports.
    fn name(&self) -> &str;

    /// React to a published event.
    ///
    /// The event is shared as `Arc` so every observer sees the same
    /// immutable data.
    async fn update(&self, event: &Arc<DomainEvent>) -> Result<()>;

    /// Whether a failure of this observer aborts the remaining fan-out.
    ///
    /// Non-critical observers (the default) are logged and skipped on
    /// failure; delivery to later observers continues.
    fn is_critical(&self) -> bool {
        false
    }
}
