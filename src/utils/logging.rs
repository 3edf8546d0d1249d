//! Logging utilities
//!
//! Provides logging setup and configuration.

/// Setup logging (env_logger picks up the RUST_LOG environment variable)
pub fn setup_logging() {
    env_logger::init();
}

/// Logging setup for tests; safe to call from multiple test functions.
pub fn setup_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
