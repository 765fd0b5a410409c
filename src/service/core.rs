//! File access service core
//!
//! Entry point used by the rest of the application to obtain private
//! persistent files and directories under the user's home root, and
//! temporary scratch artifacts.
//!
//! Nothing returned here is encrypted or access-restricted: do not store
//! unencrypted sensitive data through these paths.

use log::warn;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ConfigurationService;
use crate::error::FileAccessError;
use crate::service::registry::ConfigurationLink;
use crate::storage::{self, FileHandle, Probe};
use crate::temp;

#[derive(Debug, Default)]
pub struct FileAccessService {
    configuration: ConfigurationLink,
}

impl FileAccessService {
    /// Creates a service with no configuration registered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configuration(configuration: Arc<dyn ConfigurationService>) -> Self {
        let service = Self::new();
        service.set_configuration_service(configuration);
        service
    }

    pub fn set_configuration_service(&self, configuration: Arc<dyn ConfigurationService>) {
        self.configuration.set(configuration);
    }

    /// Unregisters `configuration` if it is still the active one.
    pub fn unset_configuration_service(&self, configuration: &Arc<dyn ConfigurationService>) {
        self.configuration.unset(configuration);
    }

    /// Home root built from the current configuration, ending in a separator.
    ///
    /// Configuration is read on every call and never cached.
    pub fn resolve_home_path(&self) -> Result<String, FileAccessError> {
        let configuration = self
            .configuration
            .get()
            .ok_or(FileAccessError::ConfigurationUnavailable)?;

        Ok(storage::compose_home_path(
            &configuration.sc_home_dir_location(),
            &configuration.sc_home_dir_name(),
        ))
    }

    /// Returns a newly created temporary file.
    ///
    /// After it is closed there is no guarantee it can be reopened or that
    /// it keeps its contents.
    pub fn get_temporary_file(&self) -> Result<PathBuf, FileAccessError> {
        temp::create_temp_file()
    }

    pub fn get_temporary_directory(&self) -> Result<PathBuf, FileAccessError> {
        temp::create_temp_dir()
    }

    /// Returns a file specific to the current user.
    ///
    /// The file may not exist, but at the time of return it can be read or
    /// written, or created in its directory. The directory is created if
    /// missing.
    pub fn get_private_persistent_file(
        &self,
        file_name: &str,
    ) -> Result<FileHandle, FileAccessError> {
        let home = self.resolve_home_path()?;

        match storage::accessible_file(&home, file_name)? {
            Probe::Accessible(handle) => Ok(handle),
            Probe::Denied(path) => {
                warn!(
                    "Insufficient rights to access {} in current user's home directory",
                    path.display()
                );
                Err(FileAccessError::InsufficientRights(path))
            }
        }
    }

    /// Returns a directory specific to the current user, creating it if needed.
    pub fn get_private_persistent_directory(
        &self,
        dir_name: &str,
    ) -> Result<FileHandle, FileAccessError> {
        let home = self.resolve_home_path()?;
        storage::private_directory(&home, dir_name)
    }

    /// Same as [`Self::get_private_persistent_directory`] with `segments`
    /// joined in order by the platform separator.
    pub fn get_private_persistent_directory_from_segments<S: AsRef<str>>(
        &self,
        segments: &[S],
    ) -> Result<FileHandle, FileAccessError> {
        self.get_private_persistent_directory(&storage::join_segments(segments))
    }
}
