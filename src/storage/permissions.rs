//! Access probes
//!
//! Answers "could this process read or write here right now" with access(2)
//! on Unix, so the path is never opened: FIFOs and device nodes are probed
//! without blocking or side effects. Results are not durable: nothing is
//! locked after a probe returns.

use std::path::Path;

#[cfg(unix)]
fn has_access(path: &Path, mode: nix::unistd::AccessFlags) -> bool {
    nix::unistd::access(path, mode).is_ok()
}

/// Check if the path can be read
#[cfg(unix)]
pub fn is_readable(path: &Path) -> bool {
    has_access(path, nix::unistd::AccessFlags::R_OK)
}

/// Check if the path can be written
#[cfg(unix)]
pub fn is_writable(path: &Path) -> bool {
    has_access(path, nix::unistd::AccessFlags::W_OK)
}

/// Check if new entries can be created inside `dir`
#[cfg(unix)]
pub fn is_directory_writable(dir: &Path) -> bool {
    use nix::unistd::AccessFlags;

    dir.is_dir() && has_access(dir, AccessFlags::W_OK | AccessFlags::X_OK)
}

#[cfg(not(unix))]
pub fn is_readable(path: &Path) -> bool {
    path.metadata().is_ok()
}

#[cfg(not(unix))]
pub fn is_writable(path: &Path) -> bool {
    path.metadata()
        .is_ok_and(|meta| !meta.permissions().readonly())
}

#[cfg(not(unix))]
pub fn is_directory_writable(dir: &Path) -> bool {
    // Unnamed temp file, removed as soon as it is dropped.
    dir.is_dir() && tempfile::tempfile_in(dir).is_ok()
}
