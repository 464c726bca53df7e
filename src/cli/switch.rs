use anyhow::{Context, Result};

use super::GlobalArgs;
use crate::resolve::resolve_by_name;
use crate::store::RegistryStore;
use crate::target::{self, Scope};

pub fn run(args: &GlobalArgs, name: String, scope: Scope) -> Result<()> {
    let home = args.home()?;
    let store = RegistryStore::open_for_read(&home).context("failed to open registry list")?;
    let entry = resolve_by_name(store.entries(), &name)?;

    let dir = std::env::current_dir().context("failed to read current directory")?;
    let program = args.manager_program()?;
    let target = target::for_scope(scope, &program, &dir);

    target
        .set_active(&entry.url)
        .with_context(|| format!("failed to switch {scope} registry to '{name}'"))?;

    println!("Switched to '{}' ({})", entry.name, entry.url);
    println!("  target: {}", target.describe());
    Ok(())
}
