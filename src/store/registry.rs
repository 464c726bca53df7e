use std::fs;
use std::path::{Path, PathBuf};

use crate::error::XxgError;
use crate::model::{RegistryEntry, default_registries};

pub const REGISTRY_FILE: &str = "xxg-registries.json";

/// The ordered registry list persisted as a JSON array in the home directory.
///
/// Every mutation rewrites the whole file. The write is not atomic, so a
/// crash mid-write can leave a truncated file behind.
pub struct RegistryStore {
    path: PathBuf,
    entries: Vec<RegistryEntry>,
}

impl RegistryStore {
    pub fn file_path(home: &Path) -> PathBuf {
        home.join(REGISTRY_FILE)
    }

    /// Write the default list if no registry file exists yet.
    /// Returns `true` when the file was created.
    pub fn initialize(home: &Path) -> Result<bool, XxgError> {
        let path = Self::file_path(home);
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(home).map_err(|source| XxgError::DirCreate {
            path: home.to_path_buf(),
            source,
        })?;
        write_list(&path, &default_registries())?;
        tracing::debug!(path = %path.display(), "created registry list with defaults");
        Ok(true)
    }

    pub fn load(home: &Path) -> Result<Self, XxgError> {
        let path = Self::file_path(home);
        if !path.exists() {
            return Err(XxgError::ConfigMissing(path));
        }
        let content = fs::read_to_string(&path).map_err(|source| XxgError::FileRead {
            path: path.clone(),
            source,
        })?;
        let entries: Vec<RegistryEntry> = serde_json::from_str(&content)
            .map_err(|source| XxgError::ConfigCorrupt {
                path: path.clone(),
                source,
            })?;

        Ok(Self { path, entries })
    }

    /// Initialize on first use, then load.
    pub fn open(home: &Path) -> Result<Self, XxgError> {
        Self::initialize(home)?;
        Self::load(home)
    }

    /// Like [`RegistryStore::open`], but a corrupt file yields an empty list
    /// after a warning. Only for commands that never save.
    pub fn open_for_read(home: &Path) -> Result<Self, XxgError> {
        match Self::open(home) {
            Err(XxgError::ConfigCorrupt { path, source }) => {
                tracing::debug!(path = %path.display(), "falling back to an empty registry list");
                eprintln!(
                    "warning: registry list at {} is corrupt ({source}); treating it as empty",
                    path.display()
                );
                Ok(Self {
                    path,
                    entries: Vec::new(),
                })
            }
            other => other,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn add(&mut self, entry: RegistryEntry) -> Result<(), XxgError> {
        if self.get(&entry.name).is_some() {
            return Err(XxgError::DuplicateName { name: entry.name });
        }
        validate_name(&entry.name)?;
        validate_url(&entry.url)?;

        self.entries.push(entry);
        self.save()
    }

    pub fn remove(&mut self, name: &str) -> Result<RegistryEntry, XxgError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| XxgError::NotFound {
                name: name.to_string(),
            })?;
        if self.entries.len() == 1 {
            return Err(XxgError::LastRegistry {
                name: name.to_string(),
            });
        }
        let entry = self.entries.remove(index);
        self.save()?;
        Ok(entry)
    }

    pub fn save(&self) -> Result<(), XxgError> {
        write_list(&self.path, &self.entries)
    }
}

fn write_list(path: &Path, entries: &[RegistryEntry]) -> Result<(), XxgError> {
    let content = serde_json::to_string_pretty(entries)?;
    fs::write(path, content).map_err(|source| XxgError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = entries.len(), "saved registry list");
    Ok(())
}

fn validate_name(name: &str) -> Result<(), XxgError> {
    if name.is_empty() {
        return Err(XxgError::InvalidName {
            name: name.to_string(),
            reason: "name cannot be empty".to_string(),
        });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(XxgError::InvalidName {
            name: name.to_string(),
            reason: "name must not contain whitespace".to_string(),
        });
    }
    Ok(())
}

fn validate_url(url: &str) -> Result<(), XxgError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| XxgError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(XxgError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{other}' (expected http or https)"),
        }),
    }
}
