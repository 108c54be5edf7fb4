use std::path::PathBuf;

use photokey_core::{Config, RunDefaults};

/// Shared application state
pub struct AppState {
    config: Config,
    default_folder: PathBuf,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let default_folder = config.defaults.resolved_folder();
        Self {
            config,
            default_folder,
        }
    }

    /// Folder shown in a fresh form and used when the submitted one is blank.
    pub fn default_folder(&self) -> &PathBuf {
        &self.default_folder
    }

    pub fn defaults(&self) -> &RunDefaults {
        &self.config.defaults
    }
}
