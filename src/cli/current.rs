use anyhow::{Context, Result};

use super::GlobalArgs;
use crate::manager::GlobalConfigBridge;
use crate::npmrc::LocalConfigPatcher;
use crate::resolve::resolve_active;
use crate::store::RegistryStore;
use crate::target::RegistryTarget;

pub fn run(args: &GlobalArgs, local: bool) -> Result<()> {
    let home = args.home()?;
    let store = RegistryStore::open_for_read(&home).context("failed to open registry list")?;

    let url = if local {
        let dir = std::env::current_dir().context("failed to read current directory")?;
        match LocalConfigPatcher::new(&dir).get_active() {
            Ok(url) => Some(url),
            Err(e) => {
                eprintln!("warning: {e}");
                None
            }
        }
    } else {
        global_active(&args.manager_program()?)
    };

    let Some(url) = url else {
        println!("Current registry not found.");
        return Ok(());
    };

    match resolve_active(store.entries(), &url) {
        Ok(entry) => println!("Current registry is {entry}"),
        Err(e) => {
            tracing::debug!("{e}");
            println!("Current registry not found ({url} is not in the list).");
        }
    }
    Ok(())
}

/// Ask the package manager for its global registry. Failures are reported
/// and treated as "unknown" so listing still works without npm.
pub(crate) fn global_active(program: &str) -> Option<String> {
    match GlobalConfigBridge::new(program).get_active() {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!(program, "global registry unavailable");
            eprintln!("warning: could not read the global registry: {e}");
            None
        }
    }
}
