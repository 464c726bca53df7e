use anyhow::{Context, Result};

use super::{ConfigSubcommand, GlobalArgs};
use crate::store::{self, RegistryStore};

const KEYS: &str = "manager, ping_timeout_secs";

pub fn run(args: &GlobalArgs, cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Show => run_show(args),
        ConfigSubcommand::Set { key, value } => run_set(args, key, value),
        ConfigSubcommand::Get { key } => run_get(args, key),
    }
}

fn run_show(args: &GlobalArgs) -> Result<()> {
    let home = args.home()?;
    let settings = args.settings()?;

    println!("Registry list: {}", RegistryStore::file_path(&home).display());
    println!("Settings:      {}", store::settings::settings_path(&home).display());
    println!("Manager:       {}", settings.manager_program(args.manager.as_deref()));
    println!("Ping timeout:  {}s", settings.ping_timeout_secs);
    Ok(())
}

fn run_set(args: &GlobalArgs, key: String, value: String) -> Result<()> {
    let home = args.home()?;
    let mut settings = args.settings()?;

    match key.as_str() {
        "manager" => {
            if value.trim().is_empty() {
                anyhow::bail!("invalid manager value: must not be empty");
            }
            settings.manager = value.trim().to_string();
        }
        "ping_timeout_secs" => {
            let secs = value
                .parse::<u64>()
                .with_context(|| format!("invalid ping_timeout_secs value: {value} (expected a number)"))?;
            if secs == 0 {
                anyhow::bail!("invalid ping_timeout_secs value: must be at least 1");
            }
            settings.ping_timeout_secs = secs;
        }
        _ => anyhow::bail!("unknown config key: {key}\nValid keys: {KEYS}"),
    }

    store::save_settings(&home, &settings).context("failed to save settings")?;
    println!("Set {key} = {value}");
    Ok(())
}

fn run_get(args: &GlobalArgs, key: String) -> Result<()> {
    let settings = args.settings()?;
    match key.as_str() {
        "manager" => println!("{}", settings.manager),
        "ping_timeout_secs" => println!("{}", settings.ping_timeout_secs),
        _ => anyhow::bail!("unknown config key: {key}\nValid keys: {KEYS}"),
    }
    Ok(())
}
