//! Abstract interfaces for armature components.
//!
//! These traits define the contracts for:
//! - Entity storage (keyed repository)
//! - Outbound notification (fire-and-forget message ports)
//! - Event observation (bus listeners)
//! - Processing strategies (interchangeable payload handlers)

pub mod notifier;
pub mod observer;
pub mod processor;
pub mod repository;

pub use notifier::{Notifier, NotifyError};
pub use observer::{Observer, ObserverError};
pub use processor::{ProcessError, Processor};
pub use repository::{Repository, Storable, StoreError};
