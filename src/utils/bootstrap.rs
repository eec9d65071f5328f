//! Bootstrap utilities for embedding applications.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with the `ARMATURE_LOG` environment variable.
///
/// Defaults to "info" level if `ARMATURE_LOG` is not set. Call once from
/// the embedding application; the library never installs a subscriber on
/// its own.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("ARMATURE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
