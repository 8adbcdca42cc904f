use std::{fs, path::Path};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

/// Reads `path` and merges it over the defaults. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::default();

    if !path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}
