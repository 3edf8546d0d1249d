//! Navigate module
//!
//! Cyclic navigation over the in-memory rows of the most recent catalog
//! query.

mod navigator;

pub use navigator::RecordNavigator;
