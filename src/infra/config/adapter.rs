use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Loads configuration from a TOML file, `./config.toml` unless a path is given.
#[derive(Debug, Clone)]
pub struct FileConfigAdapter {
    path: PathBuf,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
        }
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(load(&self.path)?)
    }

    fn describe_source(&self) -> String {
        if self.path.exists() {
            self.path.display().to_string()
        } else {
            format!("{} (not found, using defaults)", self.path.display())
        }
    }
}
