//! Outbound notification interface.

use async_trait::async_trait;

/// Result type for notifier operations.
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Errors from notification operations.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("unknown notification channel: {0}")]
    UnknownChannel(String),

    #[error("delivery via {channel} failed: {message}")]
    Delivery { channel: String, message: String },
}

/// Capability to send a message to a recipient.
///
/// Fire-and-forget: no retry, no delivery confirmation. The implementations
/// in this crate are logging stubs standing in for a real messaging
/// collaborator.
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Channel tag of this notifier (e.g. `"EMAIL"`).
    fn channel(&self) -> &str;

    /// Send `message` to `recipient`.
    async fn send(&self, recipient: &str, message: &str) -> Result<()>;
}
