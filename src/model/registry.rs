use serde::{Deserialize, Serialize};

/// A named registry endpoint, serialized as `{"name": ..., "url": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryEntry {
    pub name: String,
    pub url: String,
}

impl RegistryEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl std::fmt::Display for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.url)
    }
}

/// Entries written on first run, in this order.
pub const DEFAULT_REGISTRIES: &[(&str, &str)] = &[
    ("npm", "https://registry.npmjs.org/"),
    ("yarn", "https://registry.yarnpkg.com/"),
    ("cnpm", "http://r.cnpmjs.org/"),
    ("taobao", "https://registry.npmmirror.com/"),
    ("npmMirror", "https://skimdb.npmjs.com/registry/"),
];

pub fn default_registries() -> Vec<RegistryEntry> {
    DEFAULT_REGISTRIES
        .iter()
        .map(|(name, url)| RegistryEntry::new(*name, *url))
        .collect()
}
