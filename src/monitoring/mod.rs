//! Client-side monitoring.
//!
//! Structured browser-console logging; the API client reports request
//! failures through here.

pub mod logger;

pub use logger::Logger;

/// Initialize monitoring. Call once at app startup in main.rs.
pub fn init() {
    Logger::init();
}
