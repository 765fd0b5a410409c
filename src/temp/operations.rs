//! Temporary file allocation

use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FileAccessError, TempDirStep};
use crate::storage::filesystem::create_directory;

/// The file prefix for all temp files.
pub const TEMP_FILE_PREFIX: &str = "SIPCOMM";

/// The file suffix for all temp files.
pub const TEMP_FILE_SUFFIX: &str = "TEMP";

/// Creates a new, previously nonexistent temp file and returns its path.
///
/// The file is created exclusively, so concurrent callers in this or other
/// processes never receive the same path. It is not removed automatically.
pub fn create_temp_file() -> Result<PathBuf, FileAccessError> {
    let file = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(TEMP_FILE_SUFFIX)
        .tempfile()
        .map_err(|e| {
            error!("Could not create temporary file: {}", e);
            FileAccessError::TempFileCreationFailed(e)
        })?;

    let (_, path) = file
        .keep()
        .map_err(|e| FileAccessError::TempFileCreationFailed(e.error))?;

    debug!("Created temporary file {}", path.display());
    Ok(path)
}

/// Creates a temp directory at a freshly allocated temp file name.
pub fn create_temp_dir() -> Result<PathBuf, FileAccessError> {
    let path = create_temp_file()?;
    replace_with_directory(path)
}

/// Deletes the placeholder file at `path` and creates a directory in its place.
fn replace_with_directory(path: PathBuf) -> Result<PathBuf, FileAccessError> {
    let replaced = remove_placeholder(&path).and_then(|()| directory_in_place(&path));
    if let Err(step) = replaced {
        return Err(FileAccessError::TempDirectoryCreationFailed(path, step));
    }

    info!("Created temporary directory {}", path.display());
    Ok(path)
}

fn remove_placeholder(path: &Path) -> Result<(), TempDirStep> {
    fs::remove_file(path).map_err(|e| {
        error!(
            "Could not delete temporary file {} to make room for a directory: {}",
            path.display(),
            e
        );
        TempDirStep::DeleteFailed(e)
    })
}

fn directory_in_place(path: &Path) -> Result<(), TempDirStep> {
    create_directory(path).map_err(|e| {
        error!("Could not create temporary directory {}: {}", path.display(), e);
        TempDirStep::MkdirFailed(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn file_name(path: &Path) -> String {
        path.file_name().unwrap().to_string_lossy().to_string()
    }

    #[test]
    fn test_temp_file_naming() {
        let path = create_temp_file().unwrap();
        let name = file_name(&path);

        assert!(name.starts_with(TEMP_FILE_PREFIX));
        assert!(name.ends_with(TEMP_FILE_SUFFIX));
        assert!(path.is_file());
        assert!(path.starts_with(std::env::temp_dir()));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_temp_files_are_distinct() {
        let paths: Vec<PathBuf> = (0..16).map(|_| create_temp_file().unwrap()).collect();
        let unique: HashSet<&PathBuf> = paths.iter().collect();

        assert_eq!(unique.len(), paths.len());
        for path in &paths {
            fs::remove_file(path).unwrap();
        }
    }

    #[test]
    fn test_temp_dir_is_directory() {
        let path = create_temp_dir().unwrap();

        assert!(path.is_dir());
        assert!(file_name(&path).starts_with(TEMP_FILE_PREFIX));

        fs::remove_dir(&path).unwrap();
    }

    #[test]
    fn test_replace_missing_placeholder_reports_delete() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("SIPCOMMgoneTEMP");

        let err = replace_with_directory(path.clone()).unwrap_err();

        match err {
            FileAccessError::TempDirectoryCreationFailed(p, TempDirStep::DeleteFailed(_)) => {
                assert_eq!(p, path)
            }
            other => panic!("expected delete failure, got {}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_replace_placeholder_with_directory() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("SIPCOMMplaceholderTEMP");
        fs::write(&path, b"").unwrap();

        let dir = replace_with_directory(path.clone()).unwrap();

        assert_eq!(dir, path);
        assert!(dir.is_dir());
    }

    #[test]
    fn test_directory_in_place_reports_mkdir() {
        let root = TempDir::new().unwrap();
        let blocker = root.path().join("blocker");
        fs::write(&blocker, b"file").unwrap();

        let step = directory_in_place(&blocker.join("SIPCOMMnestedTEMP")).unwrap_err();

        assert!(matches!(step, TempDirStep::MkdirFailed(_)));
        assert!(step.to_string().contains("could not create directory"));
    }
}
