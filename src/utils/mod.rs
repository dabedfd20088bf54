//! Utilities
//!
//! Configuration persistence and display formatting.

pub mod config_store;
pub mod format;
