//! Per-user persistent storage and scratch space on the host filesystem.
//!
//! [`FileAccessService`] resolves private files and directories beneath a home
//! root supplied by a [`ConfigurationService`], and hands out uniquely named
//! temporary files and directories.

pub mod config;
pub mod error;
pub mod service;
pub mod storage;
pub mod temp;
pub mod utils;

pub use config::{ConfigurationService, FileAccessConfig};
pub use error::FileAccessError;
pub use service::FileAccessService;
pub use storage::FileHandle;
