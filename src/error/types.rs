//! Error types
//!
//! Defines the closed set of failures reported by file access operations.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Reason a temporary directory could not be created.
///
/// Both steps surface as `TempDirectoryCreationFailed` but are kept apart,
/// since a failed delete and a failed mkdir call for different remediation.
#[derive(Debug)]
pub enum TempDirStep {
    DeleteFailed(io::Error),
    MkdirFailed(io::Error),
}

impl fmt::Display for TempDirStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TempDirStep::DeleteFailed(e) => {
                write!(f, "could not delete temporary file: {}", e)
            }
            TempDirStep::MkdirFailed(e) => write!(f, "could not create directory: {}", e),
        }
    }
}

/// File access errors
#[derive(Debug)]
pub enum FileAccessError {
    /// No configuration service is registered.
    ConfigurationUnavailable,
    /// The path is neither readable nor writable and its directory is not writable.
    InsufficientRights(PathBuf),
    DirectoryCreationFailed(PathBuf, io::Error),
    TempDirectoryCreationFailed(PathBuf, TempDirStep),
    TempFileCreationFailed(io::Error),
    /// A non-directory occupies the location of a requested directory.
    PathConflict(PathBuf),
}

impl fmt::Display for FileAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAccessError::ConfigurationUnavailable => {
                write!(f, "No configuration service is registered")
            }
            FileAccessError::InsufficientRights(p) => write!(
                f,
                "Insufficient rights to access this file in current user's home directory: {}",
                p.display()
            ),
            FileAccessError::DirectoryCreationFailed(p, e) => {
                write!(f, "Could not create directory {}: {}", p.display(), e)
            }
            FileAccessError::TempDirectoryCreationFailed(p, step) => write!(
                f,
                "Could not create temporary directory {}, because: {}",
                p.display(),
                step
            ),
            FileAccessError::TempFileCreationFailed(e) => {
                write!(f, "Could not create temporary file: {}", e)
            }
            FileAccessError::PathConflict(p) => write!(
                f,
                "Could not create directory because a file exists with this name: {}",
                p.display()
            ),
        }
    }
}

impl std::error::Error for FileAccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileAccessError::DirectoryCreationFailed(_, e)
            | FileAccessError::TempFileCreationFailed(e) => Some(e),
            FileAccessError::TempDirectoryCreationFailed(_, step) => match step {
                TempDirStep::DeleteFailed(e) | TempDirStep::MkdirFailed(e) => Some(e),
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_temp_dir_failures_are_distinct() {
        let delete = FileAccessError::TempDirectoryCreationFailed(
            PathBuf::from("/tmp/x"),
            TempDirStep::DeleteFailed(io::Error::new(io::ErrorKind::PermissionDenied, "busy")),
        );
        let mkdir = FileAccessError::TempDirectoryCreationFailed(
            PathBuf::from("/tmp/x"),
            TempDirStep::MkdirFailed(io::Error::new(io::ErrorKind::PermissionDenied, "busy")),
        );

        assert!(delete.to_string().contains("could not delete temporary file"));
        assert!(mkdir.to_string().contains("could not create directory"));
        assert!(delete.source().is_some());
    }

    #[test]
    fn test_sources() {
        let err = FileAccessError::TempFileCreationFailed(io::Error::other("boom"));
        assert!(err.source().is_some());
        assert!(FileAccessError::ConfigurationUnavailable.source().is_none());
        assert!(
            FileAccessError::PathConflict(PathBuf::from("/x"))
                .source()
                .is_none()
        );
    }
}
