//! Logging setup

pub use log::{debug, error, info, warn};

/// Initialize the logging system.
///
/// Log level is driven by `RUST_LOG`; validation output from the debug
/// messenger lands here alongside the application's own logging.
pub fn init() {
    env_logger::init();
}
