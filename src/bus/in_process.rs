//! In-process event bus implementation.
//!
//! Routes events to attached observers directly, without any transport.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use super::{BusError, DomainEvent, Result};
use crate::interfaces::Observer;

/// In-process event bus.
///
/// Keeps observers in attachment order and delivers each event to every
/// observer exactly once, sequentially. Membership is pointer identity:
/// attaching the same `Arc` twice is a no-op, and detach removes by
/// identity.
pub struct InProcessEventBus {
    observers: RwLock<Vec<Arc<dyn Observer>>>,
}

impl InProcessEventBus {
    /// Create a bus with no observers.
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Attach an observer if it is not already attached.
    pub async fn attach(&self, observer: Arc<dyn Observer>) {
        let mut observers = self.observers.write().await;
        if observers.iter().any(|o| Arc::ptr_eq(o, &observer)) {
            return;
        }
        info!(observer.name = %observer.name(), "Attached observer");
        observers.push(observer);
    }

    /// Detach an observer; detaching one that was never attached is a no-op.
    pub async fn detach(&self, observer: &Arc<dyn Observer>) {
        let mut observers = self.observers.write().await;
        if let Some(pos) = observers.iter().position(|o| Arc::ptr_eq(o, observer)) {
            let removed = observers.remove(pos);
            info!(observer.name = %removed.name(), "Detached observer");
        }
    }

    /// Number of currently attached observers.
    pub async fn observer_count(&self) -> usize {
        self.observers.read().await.len()
    }

    /// Deliver `event` to every attached observer in attachment order.
    ///
    /// The observer list is snapshotted under the lock and released before
    /// any callback runs, so callbacks may attach or detach observers
    /// without deadlocking. A failing critical observer aborts the
    /// remaining fan-out; a failing non-critical observer is logged and
    /// skipped.
    pub async fn notify(&self, event: Arc<DomainEvent>) -> Result<()> {
        let observers: Vec<_> = {
            let guard = self.observers.read().await;
            guard.iter().cloned().collect()
        };

        for observer in observers {
            match observer.update(&event).await {
                Ok(()) => {}
                Err(e) if observer.is_critical() => {
                    return Err(BusError::ObserverFailed {
                        name: observer.name().to_string(),
                        source: e,
                    });
                }
                Err(e) => {
                    warn!(
                        observer.name = %observer.name(),
                        event.name = %event.name,
                        error = %e,
                        "Observer failed"
                    );
                }
            }
        }

        Ok(())
    }
}

impl Default for InProcessEventBus {
    fn default() -> Self {
        Self::new()
    }
}
