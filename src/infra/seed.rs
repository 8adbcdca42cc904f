use std::{fs, path::Path};

use crate::{domain::global_state::GlobalState, infra::error::AppError};

/// Loads a JSON state snapshot to start from.
pub fn load_seed(path: &Path) -> Result<GlobalState, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| AppError::SeedParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn encode_state(global: &GlobalState) -> Result<String, AppError> {
    serde_json::to_string_pretty(global).map_err(AppError::StateEncode)
}
