//! Test utilities and mock implementations.
//!
//! This module provides mock implementations of the capability traits for
//! exercising services and the facade without real collaborators.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::bus::DomainEvent;
use crate::interfaces::notifier::{Notifier, NotifyError, Result as NotifyResult};
use crate::interfaces::observer::{Observer, ObserverError, Result as ObserverResult};
use crate::interfaces::repository::{Repository, Result as StoreResult, Storable, StoreError};

/// Notifier that records sends in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RwLock<Vec<(String, String)>>,
    fail_on_send: RwLock<bool>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_fail_on_send(&self, fail: bool) {
        *self.fail_on_send.write().await = fail;
    }

    /// Recorded `(recipient, message)` pairs, in send order.
    pub async fn sent(&self) -> Vec<(String, String)> {
        self.sent.read().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn channel(&self) -> &str {
        "RECORDING"
    }

    async fn send(&self, recipient: &str, message: &str) -> NotifyResult<()> {
        if *self.fail_on_send.read().await {
            return Err(NotifyError::Delivery {
                channel: self.channel().to_string(),
                message: "intentional failure".to_string(),
            });
        }
        self.sent
            .write()
            .await
            .push((recipient.to_string(), message.to_string()));
        Ok(())
    }
}

/// Observer that records every event it receives.
pub struct RecordingObserver {
    name: String,
    events: RwLock<Vec<Arc<DomainEvent>>>,
    fail_on_update: RwLock<bool>,
    critical: bool,
}

impl RecordingObserver {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            events: RwLock::new(Vec::new()),
            fail_on_update: RwLock::new(false),
            critical: false,
        }
    }

    /// A recording observer whose failure aborts the fan-out.
    pub fn critical(name: &str) -> Self {
        Self {
            critical: true,
            ..Self::new(name)
        }
    }

    pub async fn set_fail_on_update(&self, fail: bool) {
        *self.fail_on_update.write().await = fail;
    }

    /// Received events, in delivery order.
    pub async fn events(&self) -> Vec<Arc<DomainEvent>> {
        self.events.read().await.clone()
    }

    pub async fn event_count(&self) -> usize {
        self.events.read().await.len()
    }
}

#[async_trait]
impl Observer for RecordingObserver {
    fn name(&self) -> &str {
        &self.name
    }

    async fn update(&self, event: &Arc<DomainEvent>) -> ObserverResult<()> {
        if *self.fail_on_update.read().await {
            return Err(ObserverError::Failed("intentional failure".to_string()));
        }
        self.events.write().await.push(Arc::clone(event));
        Ok(())
    }

    fn is_critical(&self) -> bool {
        self.critical
    }
}

/// Repository whose every operation fails.
#[derive(Default)]
pub struct FailingRepository;

#[async_trait]
impl<T: Storable + 'static> Repository<T> for FailingRepository {
    async fn get_by_id(&self, _id: &str) -> StoreResult<Option<T>> {
        Err(StoreError::Backend("intentional failure".to_string()))
    }

    async fn save(&self, _entity: &mut T) -> StoreResult<()> {
        Err(StoreError::Backend("intentional failure".to_string()))
    }

    async fn delete(&self, _id: &str) -> StoreResult<()> {
        Err(StoreError::Backend("intentional failure".to_string()))
    }

    async fn list_all(&self) -> StoreResult<Vec<T>> {
        Err(StoreError::Backend("intentional failure".to_string()))
    }
}
