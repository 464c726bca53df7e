use std::fs;
use std::path::{Path, PathBuf};

use crate::error::XxgError;
use crate::target::RegistryTarget;

pub const NPMRC_FILE: &str = ".npmrc";

/// Patches the `registry=` directive of a project-local `.npmrc`.
///
/// The file is edited line by line rather than parsed, so comments, scoped
/// registries, auth tokens and any formatting written by npm itself survive.
pub struct LocalConfigPatcher {
    path: PathBuf,
}

impl LocalConfigPatcher {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(NPMRC_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String, XxgError> {
        fs::read_to_string(&self.path).map_err(|source| XxgError::FileRead {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, content: &str) -> Result<(), XxgError> {
        fs::write(&self.path, content).map_err(|source| XxgError::FileWrite {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "wrote local registry directive");
        Ok(())
    }
}

impl RegistryTarget for LocalConfigPatcher {
    fn get_active(&self) -> Result<String, XxgError> {
        if !self.path.exists() {
            return Err(XxgError::NoLocalRegistry(self.path.clone()));
        }
        let content = self.read()?;
        content
            .lines()
            .find_map(directive_value)
            .map(str::to_string)
            .ok_or_else(|| XxgError::NoLocalRegistry(self.path.clone()))
    }

    fn set_active(&self, url: &str) -> Result<(), XxgError> {
        if !self.path.exists() {
            return self.write(&format!("registry={url}\n"));
        }
        let content = self.read()?;
        self.write(&patch(&content, url))
    }

    fn describe(&self) -> String {
        format!("local ({})", self.path().display())
    }
}

/// Replace the first registry directive in `content`, or append one.
pub fn patch(content: &str, url: &str) -> String {
    let directive = format!("registry={url}");
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();

    if let Some(line) = lines.iter_mut().find(|l| directive_value(l).is_some()) {
        let crlf = line.ends_with('\r');
        *line = directive;
        if crlf {
            line.push('\r');
        }
        return lines.join("\n");
    }

    if content.is_empty() || content.ends_with('\n') {
        format!("{content}{directive}\n")
    } else {
        format!("{content}\n{directive}\n")
    }
}

/// Value of a `registry=...` line. Scoped (`@scope:registry=`) and
/// credential (`//host/:_authToken=`) lines are not directives.
fn directive_value(line: &str) -> Option<&str> {
    let (key, value) = line.split_once('=')?;
    (key.trim() == "registry").then(|| value.trim())
}
