//! Error handling
//!
//! Defines error types and handling for file access operations.

pub mod handlers;
pub mod types;

pub use types::*;
