use crate::error::XxgError;
use crate::model::RegistryEntry;

/// First entry whose URL equals `url` exactly. `None` means the active
/// registry is not one of ours, which is not an error.
pub fn resolve_by_url<'a>(entries: &'a [RegistryEntry], url: &str) -> Option<&'a RegistryEntry> {
    entries.iter().find(|e| e.url == url)
}

pub fn resolve_by_name<'a>(
    entries: &'a [RegistryEntry],
    name: &str,
) -> Result<&'a RegistryEntry, XxgError> {
    entries
        .iter()
        .find(|e| e.name == name)
        .ok_or_else(|| XxgError::NotFound {
            name: name.to_string(),
        })
}

pub fn resolve_active<'a>(
    entries: &'a [RegistryEntry],
    url: &str,
) -> Result<&'a RegistryEntry, XxgError> {
    resolve_by_url(entries, url).ok_or_else(|| XxgError::UnresolvedActive {
        url: url.to_string(),
    })
}
