use anyhow::{Context, Result};

use super::GlobalArgs;
use super::current::global_active;
use crate::resolve::resolve_by_url;
use crate::store::RegistryStore;

pub fn run(args: &GlobalArgs) -> Result<()> {
    let home = args.home()?;
    let store = RegistryStore::open_for_read(&home).context("failed to open registry list")?;
    let entries = store.entries();

    if entries.is_empty() {
        println!("No registries found.");
        return Ok(());
    }

    let active_url = global_active(&args.manager_program()?);
    let active = active_url
        .as_deref()
        .and_then(|url| resolve_by_url(entries, url));
    let width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0) + 1;

    for entry in entries {
        let marker = if active.is_some_and(|a| a.name == entry.name) {
            '*'
        } else {
            ' '
        };
        println!("{marker} {:<width$}-> {}", entry.name, entry.url);
    }
    Ok(())
}
