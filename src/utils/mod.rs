//! Utility functions
//!
//! Provides logging setup for binaries and tests.

pub mod logging;
