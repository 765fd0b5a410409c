//! File system operations
//!
//! Thin wrappers over `std::fs` used by the storage operations.

use std::fs;
use std::io::{ErrorKind, Result};
use std::path::Path;

/// Create a directory and all of its missing ancestors.
///
/// A directory that already exists, including one created by a concurrent
/// caller between our check and our mkdir, counts as success.
pub fn create_directory(path: &Path) -> Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
