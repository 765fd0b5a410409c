//! Persistent storage under the user's home root
//!
//! Handles home path composition, permission probing and on-demand
//! directory creation for private files and directories.

pub mod filesystem;
pub mod home;
pub mod operations;
pub mod permissions;
pub mod results;

pub use home::compose_home_path;
pub use operations::{accessible_file, join_segments, private_directory};
pub use results::{FileHandle, Probe};
