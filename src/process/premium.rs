//! Premium processing strategy.

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::interfaces::processor::{Processor, Result};

/// Processing with the premium extras enabled.
#[derive(Debug, Default)]
pub struct PremiumProcessor;

impl PremiumProcessor {
    /// Create a new premium processor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Processor for PremiumProcessor {
    fn name(&self) -> &str {
        super::PREMIUM_STRATEGY
    }

    async fn process(&self, payload: &Value) -> Result<()> {
        info!(payload = %payload, extras = true, "Premium processing");
        Ok(())
    }
}
