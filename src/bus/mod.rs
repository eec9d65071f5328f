//! In-process event distribution.
//!
//! This module contains:
//! - [`DomainEvent`]: the named, JSON-payload unit of notification
//! - [`InProcessEventBus`]: ordered fan-out to attached observers
//! - [`BusError`]: delivery failures

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::interfaces::observer::ObserverError;

pub mod in_process;

pub use in_process::InProcessEventBus;

/// Result type for bus operations.
pub type Result<T> = std::result::Result<T, BusError>;

/// Errors that can occur during event delivery.
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    #[error("observer '{name}' failed")]
    ObserverFailed {
        name: String,
        #[source]
        source: ObserverError,
    },
}

/// A named event with a JSON payload.
///
/// Events are distributed as `Arc<DomainEvent>` to enforce immutability
/// during fan-out: every observer receives a zero-copy reference to the
/// same data.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainEvent {
    /// Unique id of this occurrence.
    pub id: Uuid,
    /// Event name, e.g. `"USER_CREATED"`.
    pub name: String,
    /// Event payload.
    pub payload: Value,
    /// When the event was published.
    pub occurred_at: DateTime<Utc>,
}

impl DomainEvent {
    /// Create an event from an already-encoded payload.
    pub fn new(name: impl Into<String>, payload: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            payload,
            occurred_at: Utc::now(),
        }
    }

    /// Create an event by serializing `payload` to JSON.
    pub fn from_payload<T: Serialize>(
        name: impl Into<String>,
        payload: &T,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(Self::new(name, serde_json::to_value(payload)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_get_distinct_ids() {
        let a = DomainEvent::new("A", Value::Null);
        let b = DomainEvent::new("A", Value::Null);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_from_payload_encodes_to_json() {
        let event = DomainEvent::from_payload("NUMBERS", &vec![1, 2, 3]).unwrap();
        assert_eq!(event.payload, serde_json::json!([1, 2, 3]));
        assert_eq!(event.name, "NUMBERS");
    }
}
