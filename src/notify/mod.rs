//! Notification channel implementations.
//!
//! Every channel here is a structured-logging stub standing in for a real
//! messaging collaborator; delivery is the log line.

use std::sync::Arc;

use tracing::info;

use crate::interfaces::notifier::{Notifier, NotifyError};

pub mod email;
pub mod sms;

pub use email::EmailNotifier;
pub use sms::SmsNotifier;

/// Channel tag for the email notifier.
pub const EMAIL_CHANNEL: &str = "EMAIL";
/// Channel tag for the SMS notifier.
pub const SMS_CHANNEL: &str = "SMS";

/// Initialize a notifier for the given channel tag.
///
/// Tags are matched case-insensitively (`"EMAIL"`, `"email"`, ...), so the
/// lowercase convention of config files and the uppercase tags both resolve.
/// An unrecognized tag fails with [`NotifyError::UnknownChannel`] naming the
/// tag.
pub fn init_notifier(channel: &str) -> Result<Arc<dyn Notifier>, NotifyError> {
    match channel.to_ascii_uppercase().as_str() {
        EMAIL_CHANNEL => {
            info!(channel = EMAIL_CHANNEL, "Notifier initialized");
            Ok(Arc::new(EmailNotifier::new()))
        }
        SMS_CHANNEL => {
            info!(channel = SMS_CHANNEL, "Notifier initialized");
            Ok(Arc::new(SmsNotifier::new()))
        }
        _ => Err(NotifyError::UnknownChannel(channel.to_string())),
    }
}
