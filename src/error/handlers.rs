//! Error handlers
//!
//! Provides error reporting and exit code mapping for the command line tool.

use crate::error::types::FileAccessError;
use log::error;

/// Log a file access error
pub fn handle_error(err: &FileAccessError) {
    error!("File access error: {}", err);
}

/// Convert error to a sysexits-style process exit code
pub fn error_to_exit_code(err: &FileAccessError) -> i32 {
    match err {
        FileAccessError::ConfigurationUnavailable => 78,
        FileAccessError::InsufficientRights(_) => 77,
        FileAccessError::DirectoryCreationFailed(_, _) => 73,
        FileAccessError::TempDirectoryCreationFailed(_, _) => 73,
        FileAccessError::TempFileCreationFailed(_) => 73,
        FileAccessError::PathConflict(_) => 73,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            error_to_exit_code(&FileAccessError::ConfigurationUnavailable),
            78
        );
        assert_eq!(
            error_to_exit_code(&FileAccessError::InsufficientRights(PathBuf::from("/x"))),
            77
        );
        assert_eq!(
            error_to_exit_code(&FileAccessError::PathConflict(PathBuf::from("/x"))),
            73
        );
    }
}
