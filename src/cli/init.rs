use anyhow::{Context, Result};

use super::GlobalArgs;
use crate::store::RegistryStore;

pub fn run(args: &GlobalArgs) -> Result<()> {
    let home = args.home()?;
    let created =
        RegistryStore::initialize(&home).context("failed to initialize registry list")?;

    let path = RegistryStore::file_path(&home);
    if created {
        println!("Created registry list at {}", path.display());
    } else {
        println!("Registry list already exists at {}", path.display());
    }
    Ok(())
}
