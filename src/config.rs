//! Configuration for the file access service
//!
//! The service never reads settings itself: it asks a registered
//! [`ConfigurationService`] for the home directory location and name on every
//! call. [`FileAccessConfig`] is the stock implementation, loaded from
//! defaults, an optional `fileaccess.toml` and `SC_*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;

/// Default name of the application directory inside the user's home.
pub const DEFAULT_HOME_DIR_NAME: &str = ".sip-communicator";

/// Configuration collaborator consumed by the file access service.
pub trait ConfigurationService: Send + Sync {
    /// Platform home directory, e.g. `/home/alice`
    fn sc_home_dir_location(&self) -> String;

    /// Name of the application subdirectory, e.g. `.sip-communicator`
    fn sc_home_dir_name(&self) -> String;
}

/// Home directory settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FileAccessConfig {
    /// Directory under which the application directory lives.
    /// Environment: SC_HOME_DIR_LOCATION
    pub home_dir_location: String,

    /// Application directory name.
    /// Environment: SC_HOME_DIR_NAME
    pub home_dir_name: String,
}

impl FileAccessConfig {
    pub fn new(home_dir_location: impl Into<String>, home_dir_name: impl Into<String>) -> Self {
        Self {
            home_dir_location: home_dir_location.into(),
            home_dir_name: home_dir_name.into(),
        }
    }

    /// Load configuration from defaults, `fileaccess.toml` and environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("fileaccess")
    }

    /// Load configuration using `config_path` (without extension) as the optional file source
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let mut builder =
            Config::builder().set_default("home_dir_name", DEFAULT_HOME_DIR_NAME)?;

        if let Some(home) = dirs::home_dir() {
            builder =
                builder.set_default("home_dir_location", home.to_string_lossy().to_string())?;
        }

        let settings = builder
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("SC").separator("__"))
            .build()?;

        let config: FileAccessConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.home_dir_location.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "home_dir_location cannot be empty".into(),
            ));
        }

        if self.home_dir_name.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "home_dir_name cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

impl ConfigurationService for FileAccessConfig {
    fn sc_home_dir_location(&self) -> String {
        self.home_dir_location.clone()
    }

    fn sc_home_dir_name(&self) -> String {
        self.home_dir_name.clone()
    }
}
