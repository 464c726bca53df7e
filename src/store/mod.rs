pub mod registry;
pub mod settings;

use std::path::{Path, PathBuf};

use crate::error::XxgError;

pub use registry::RegistryStore;
pub use settings::{load_settings, save_settings};

/// Resolve the directory holding the registry list and settings.
pub fn home_dir(override_dir: Option<&Path>) -> Result<PathBuf, XxgError> {
    match override_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => dirs::home_dir().ok_or(XxgError::HomeDirNotFound),
    }
}
