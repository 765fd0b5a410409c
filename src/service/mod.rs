//! File access service
//!
//! The public facade over storage and temp operations, together with the
//! registration of its configuration collaborator.

pub mod core;
pub mod registry;

pub use self::core::FileAccessService;
pub use registry::ConfigurationLink;
