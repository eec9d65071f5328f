//! Concrete bus observers.

pub mod logging;

pub use logging::LoggingObserver;
