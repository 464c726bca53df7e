use anyhow::{Context, Result};
use dialoguer::Input;

use super::GlobalArgs;
use crate::error::XxgError;
use crate::model::RegistryEntry;
use crate::store::RegistryStore;

pub fn run(args: &GlobalArgs, name: Option<String>, url: Option<String>) -> Result<()> {
    let home = args.home()?;
    let mut store = RegistryStore::open(&home).context("failed to open registry list")?;

    let name = match name {
        Some(n) => n,
        None => prompt("Registry name")?,
    };
    let name = name.trim().to_string();
    if store.get(&name).is_some() {
        return Err(XxgError::DuplicateName { name }.into());
    }

    let url = match url {
        Some(u) => u,
        None => prompt("Registry URL")?,
    };

    store
        .add(RegistryEntry::new(name.clone(), url.trim()))
        .context("failed to add registry")?;

    println!("Added registry '{name}' to {}", store.path().display());
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(label)
        .interact_text()
        .with_context(|| format!("failed to read {}", label.to_lowercase()))
}
