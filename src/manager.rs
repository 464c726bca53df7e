use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};

use crate::error::XxgError;
use crate::target::RegistryTarget;

/// Reads and writes the global registry through the package manager's own
/// `config` subcommand. The manager owns that state, so it is queried on
/// every call and never cached here.
pub struct GlobalConfigBridge {
    program: String,
}

impl GlobalConfigBridge {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Locate the binary on PATH. On Windows this also finds `npm.cmd`
    /// shims, which `Command` alone does not resolve.
    fn resolve(&self) -> Result<PathBuf, XxgError> {
        which::which(&self.program).map_err(|e| XxgError::ExternalToolMissing {
            program: self.program.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, e),
        })
    }

    fn run(&self, args: &[&str]) -> Result<Output, XxgError> {
        let binary = self.resolve()?;
        tracing::debug!(program = %binary.display(), ?args, "invoking package manager");
        let output = Command::new(&binary)
            .args(args)
            .output()
            .map_err(|source| XxgError::ExternalToolMissing {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(XxgError::ExternalToolFailure {
                program: self.program.clone(),
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(output)
    }
}

impl RegistryTarget for GlobalConfigBridge {
    fn get_active(&self) -> Result<String, XxgError> {
        let output = self.run(&["config", "get", "registry"])?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn set_active(&self, url: &str) -> Result<(), XxgError> {
        self.run(&["config", "set", "registry", url])?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("global ({} config)", self.program)
    }
}
