//! Processing strategy interface.

use async_trait::async_trait;
use serde_json::Value;

/// Result type for processor operations.
pub type Result<T> = std::result::Result<T, ProcessError>;

/// Errors from processing strategies.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("unknown processing strategy: {0}")]
    UnknownStrategy(String),

    #[error("processing failed: {0}")]
    Failed(String),
}

/// An interchangeable processing strategy.
///
/// Variants are tagged implementations selected at composition time via
/// [`crate::process::init_processor`]; callers depend only on this trait.
#[async_trait]
pub trait Processor: Send + Sync + std::fmt::Debug {
    /// Name of this strategy.
    fn name(&self) -> &str;

    /// Process an arbitrary JSON payload.
    async fn process(&self, payload: &Value) -> Result<()>;
}
