use std::path::Path;

use crate::error::XxgError;
use crate::manager::GlobalConfigBridge;
use crate::npmrc::LocalConfigPatcher;

/// Somewhere the active registry URL lives.
pub trait RegistryTarget {
    fn get_active(&self) -> Result<String, XxgError>;
    fn set_active(&self, url: &str) -> Result<(), XxgError>;
    /// Human-readable location, used in confirmations.
    fn describe(&self) -> String;
}

/// Where `use` writes the registry URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Local,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

pub fn for_scope(scope: Scope, program: &str, project_dir: &Path) -> Box<dyn RegistryTarget> {
    match scope {
        Scope::Global => Box::new(GlobalConfigBridge::new(program)),
        Scope::Local => Box::new(LocalConfigPatcher::new(project_dir)),
    }
}
