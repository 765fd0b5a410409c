//! Temporary artifacts
//!
//! Scratch files and directories in the OS temp directory. Nothing here
//! depends on configuration.

mod operations;

pub use operations::{TEMP_FILE_PREFIX, TEMP_FILE_SUFFIX, create_temp_dir, create_temp_file};
