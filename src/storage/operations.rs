//! Storage operations
//!
//! Resolves private files and directories beneath the home root, creating
//! the containing directories on demand.

use log::{debug, error, info, warn};
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

use crate::error::FileAccessError;
use crate::storage::filesystem::{create_directory, directory_exists};
use crate::storage::home::with_trailing_separator;
use crate::storage::permissions::{is_directory_writable, is_readable, is_writable};
use crate::storage::results::{FileHandle, Probe};

/// Join directory segments with the platform separator, preserving their order
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(MAIN_SEPARATOR_STR)
}

/// Probes `file_name` beneath `home_dir`.
///
/// An existing file that is readable or writable is returned as is. Otherwise
/// the containing directory is created when missing, and the result is
/// [`Probe::Denied`] when it exists but is not writable, or when the file
/// exists without granting any access. The file itself is never created.
///
/// For a file that does not exist yet, `writable` on the returned handle
/// means it can be created.
pub fn accessible_file(home_dir: &str, file_name: &str) -> Result<Probe, FileAccessError> {
    let home_dir = with_trailing_separator(home_dir.trim());
    let candidate = PathBuf::from(format!("{}{}", home_dir, file_name));

    let readable = is_readable(&candidate);
    let writable = is_writable(&candidate);
    if readable || writable {
        return Ok(Probe::Accessible(FileHandle {
            path: candidate,
            exists: true,
            readable,
            writable,
        }));
    }

    let containing = candidate
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&home_dir));

    if !containing.exists() {
        debug!("Creating home directory : {}", containing.display());
        if let Err(e) = create_directory(&containing) {
            error!(
                "Could not create the home directory : {}: {}",
                containing.display(),
                e
            );
            return Err(FileAccessError::DirectoryCreationFailed(containing, e));
        }
        debug!("Home directory created : {}", containing.display());
    } else if !is_directory_writable(&containing) {
        warn!(
            "Directory {} is not writable, cannot provide {}",
            containing.display(),
            candidate.display()
        );
        return Ok(Probe::Denied(candidate));
    }

    // Present but neither readable nor writable: a writable directory does
    // not make the existing entry usable.
    if candidate.symlink_metadata().is_ok() {
        warn!("Insufficient rights on existing file {}", candidate.display());
        return Ok(Probe::Denied(candidate));
    }

    Ok(Probe::Accessible(FileHandle {
        path: candidate,
        exists: false,
        readable: false,
        writable: true,
    }))
}

/// Resolves the directory `dir_name` beneath `home_dir`, creating it and any
/// missing ancestors. Repeated calls return the same directory.
pub fn private_directory(home_dir: &str, dir_name: &str) -> Result<FileHandle, FileAccessError> {
    let dir = PathBuf::from(format!("{}{}", with_trailing_separator(home_dir), dir_name));

    if dir.exists() {
        if !dir.is_dir() {
            error!(
                "Could not create directory because a file exists with this name: {}",
                dir.display()
            );
            return Err(FileAccessError::PathConflict(dir));
        }
    } else {
        create_directory(&dir).map_err(|e| {
            error!("Could not create directory {}: {}", dir.display(), e);
            FileAccessError::DirectoryCreationFailed(dir.clone(), e)
        })?;
        info!("Created private directory {}", dir.display());
    }

    Ok(FileHandle {
        exists: directory_exists(&dir),
        readable: is_readable(&dir),
        writable: is_directory_writable(&dir),
        path: dir,
    })
}
