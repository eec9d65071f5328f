//! Processing strategy implementations.
//!
//! Strategies are interchangeable payload handlers selected at composition
//! time; both variants here are logging stubs.

use std::sync::Arc;

use tracing::info;

use crate::interfaces::processor::{ProcessError, Processor};

pub mod premium;
pub mod standard;

pub use premium::PremiumProcessor;
pub use standard::StandardProcessor;

/// Strategy tag for plain processing.
pub const STANDARD_STRATEGY: &str = "STANDARD";
/// Strategy tag for processing with premium extras.
pub const PREMIUM_STRATEGY: &str = "PREMIUM";

/// Initialize a processing strategy for the given tag.
///
/// Tags are matched case-insensitively. An unrecognized tag fails with
/// [`ProcessError::UnknownStrategy`] naming the tag.
pub fn init_processor(strategy: &str) -> Result<Arc<dyn Processor>, ProcessError> {
    match strategy.to_ascii_uppercase().as_str() {
        STANDARD_STRATEGY => {
            info!(strategy = STANDARD_STRATEGY, "Processor initialized");
            Ok(Arc::new(StandardProcessor::new()))
        }
        PREMIUM_STRATEGY => {
            info!(strategy = PREMIUM_STRATEGY, "Processor initialized");
            Ok(Arc::new(PremiumProcessor::new()))
        }
        _ => Err(ProcessError::UnknownStrategy(strategy.to_string())),
    }
}
