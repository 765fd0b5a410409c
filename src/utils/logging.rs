//! Logging utilities
//!
//! Provides logging setup and configuration.

/// Setup logging for the command line tool.
///
/// Honours `RUST_LOG`; defaults to `info` when it is not set.
pub fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
