//! SMS notification stub.

use async_trait::async_trait;
use tracing::info;

use crate::interfaces::notifier::{Notifier, Result};

/// SMS-style notifier.
///
/// Logs the would-be delivery instead of talking to a carrier gateway.
#[derive(Debug, Default)]
pub struct SmsNotifier;

impl SmsNotifier {
    /// Create a new SMS notifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    fn channel(&self) -> &str {
        super::SMS_CHANNEL
    }

    async fn send(&self, recipient: &str, message: &str) -> Result<()> {
        info!(recipient = %recipient, message = %message, "SMS sent");
        Ok(())
    }
}
