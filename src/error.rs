use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XxgError {
    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory: {path}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to determine home directory; set XXG_HOME or --home")]
    HomeDirNotFound,

    #[error("registry list not found at {0}; run `xxg init` first")]
    ConfigMissing(PathBuf),

    #[error("registry list at {path} is corrupt")]
    ConfigCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize registry list: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("registry '{name}' already exists")]
    DuplicateName { name: String },

    #[error("registry '{name}' not found")]
    NotFound { name: String },

    #[error("cannot delete '{name}': it is the last registry")]
    LastRegistry { name: String },

    #[error("invalid registry name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid registry url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("`{program}` failed: {stderr}")]
    ExternalToolFailure { program: String, stderr: String },

    #[error("`{program}` is not installed or not in PATH")]
    ExternalToolMissing {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("active registry {url} does not match any known registry")]
    UnresolvedActive { url: String },

    #[error("no registry directive in {0}")]
    NoLocalRegistry(PathBuf),

    #[error("probe of {url} failed")]
    ProbeFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
