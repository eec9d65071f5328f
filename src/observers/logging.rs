//! Logging observer.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::bus::DomainEvent;
use crate::interfaces::observer::{Observer, Result};

/// Observer that logs every published event.
///
/// Non-critical: a failure here never blocks delivery to other observers.
/// The facade pre-wires one of these onto the bus.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    /// Create a new logging observer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Observer for LoggingObserver {
    fn name(&self) -> &str {
        "logging"
    }

    async fn update(&self, event: &Arc<DomainEvent>) -> Result<()> {
        info!(
            event.name = %event.name,
            event.id = %event.id,
            payload = %event.payload,
            "Event observed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[tokio::test]
    async fn test_update_never_fails() {
        let observer = LoggingObserver::new();
        let event = Arc::new(DomainEvent::new("ANYTHING", Value::Null));
        assert!(observer.update(&event).await.is_ok());
        assert!(!observer.is_critical());
    }
}
