//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::path::PathBuf;

/// A resolved path together with its accessibility at resolution time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub path: PathBuf,
    pub exists: bool,
    pub readable: bool,
    pub writable: bool,
}

impl FileHandle {
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Outcome of probing a private file location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// The file is usable, or can be created in its directory.
    Accessible(FileHandle),
    /// Neither the file nor its containing directory grant access.
    Denied(PathBuf),
}
