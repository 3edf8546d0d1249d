//! Whiskey catalog core
//!
//! The stateful heart of a small whiskey-information desktop app: credential
//! validation with hashed passwords, a forced-reset flow for factory-default
//! accounts, and cyclic navigation over cached catalog query results. The
//! GUI and the real database live outside this crate; presentation code
//! drives a [`Session`] and renders the messages and rows it returns.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod navigate;
pub mod session;
pub mod store;
pub mod utils;
pub mod validation;

pub use catalog::CatalogRow;
pub use navigate::RecordNavigator;
pub use session::{Screen, Session};
