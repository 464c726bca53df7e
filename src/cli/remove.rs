use anyhow::{Context, Result};

use super::GlobalArgs;
use crate::store::RegistryStore;

pub fn run(args: &GlobalArgs, name: String) -> Result<()> {
    let home = args.home()?;
    let mut store = RegistryStore::open(&home).context("failed to open registry list")?;

    let removed = store.remove(&name)?;

    println!("Deleted registry '{}' ({})", removed.name, removed.url);
    Ok(())
}
