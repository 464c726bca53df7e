use std::fs;
use std::path::{Path, PathBuf};

use crate::error::XxgError;
use crate::model::Settings;

pub const SETTINGS_FILE: &str = "xxg-config.toml";

pub fn settings_path(home: &Path) -> PathBuf {
    home.join(SETTINGS_FILE)
}

pub fn load_settings(home: &Path) -> Result<Settings, XxgError> {
    let path = settings_path(home);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| XxgError::FileRead {
        path: path.clone(),
        source,
    })?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

pub fn save_settings(home: &Path, settings: &Settings) -> Result<(), XxgError> {
    fs::create_dir_all(home).map_err(|source| XxgError::DirCreate {
        path: home.to_path_buf(),
        source,
    })?;
    let path = settings_path(home);
    let content = toml::to_string_pretty(settings)?;
    fs::write(&path, content).map_err(|source| XxgError::FileWrite { path, source })?;
    Ok(())
}
