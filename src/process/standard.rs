//! Standard processing strategy.

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::interfaces::processor::{Processor, Result};

/// Plain processing without extras.
#[derive(Debug, Default)]
pub struct StandardProcessor;

impl StandardProcessor {
    /// Create a new standard processor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Processor for StandardProcessor {
    fn name(&self) -> &str {
        super::STANDARD_STRATEGY
    }

    async fn process(&self, payload: &Value) -> Result<()> {
        info!(payload = %payload, "Standard processing");
        Ok(())
    }
}
