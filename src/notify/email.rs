//! Email notification stub.

use async_trait::async_trait;
use tracing::info;

use crate::interfaces::notifier::{Notifier, Result};

/// Email-style notifier.
///
/// Logs the would-be delivery instead of talking to a mail system.
#[derive(Debug, Default)]
pub struct EmailNotifier;

impl EmailNotifier {
    /// Create a new email notifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    fn channel(&self) -> &str {
        super::EMAIL_CHANNEL
    }

    async fn send(&self, recipient: &str, message: &str) -> Result<()> {
        info!(recipient = %recipient, message = %message, "Email sent");
        Ok(())
    }
}
