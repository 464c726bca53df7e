use std::time::Duration;

use anyhow::{Context, Result};
use dialoguer::Select;

use super::GlobalArgs;
use crate::model::RegistryEntry;
use crate::probe::{self, probe};
use crate::resolve::resolve_by_name;
use crate::store::RegistryStore;

pub async fn run(args: &GlobalArgs, name: Option<String>) -> Result<()> {
    let home = args.home()?;
    let settings = args.settings()?;
    let store = RegistryStore::open_for_read(&home).context("failed to open registry list")?;

    let entry = match name {
        Some(n) => resolve_by_name(store.entries(), &n)?.clone(),
        None if store.entries().is_empty() => {
            println!("No registries found.");
            return Ok(());
        }
        None => choose(store.entries())?,
    };

    let client = probe::client(Duration::from_secs(settings.ping_timeout_secs))
        .context("failed to build HTTP client")?;
    match probe(&client, &entry.url).await {
        Ok(elapsed) => println!("{}: {} ms", entry.name, elapsed.as_millis()),
        Err(e) => println!("{}: failed ({:#})", entry.name, anyhow::Error::new(e)),
    }
    Ok(())
}

fn choose(entries: &[RegistryEntry]) -> Result<RegistryEntry> {
    let items: Vec<String> = entries
        .iter()
        .map(|e| format!("{} --- {}", e.name, e.url))
        .collect();
    let index = Select::new()
        .with_prompt("Registry to ping")
        .items(&items)
        .default(0)
        .interact()
        .context("failed to read selection")?;

    Ok(entries[index].clone())
}
