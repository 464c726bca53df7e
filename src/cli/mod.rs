pub mod add;
pub mod config;
pub mod current;
pub mod init;
pub mod list;
pub mod ping;
pub mod remove;
pub mod switch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::model::Settings;
use crate::target::Scope;
use crate::store;

#[derive(Debug, Parser)]
#[command(
    name = "xxg",
    about = "Switch between npm registries globally or per project",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Directory holding the registry list and settings (default: your home directory)
    #[arg(long, env = "XXG_HOME", global = true)]
    pub home: Option<PathBuf>,

    /// Package manager binary to query and configure (default: from settings, npm)
    #[arg(long, env = "XXG_MANAGER", global = true)]
    pub manager: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all registries, marking the active one with `*`
    #[command(alias = "list")]
    Ls,

    /// Switch the active registry
    Use {
        /// Name of the registry to use
        name: String,

        /// Write to .npmrc in the current directory
        #[arg(long, conflicts_with = "global")]
        local: bool,

        /// Write to the package manager's global config (default)
        #[arg(long)]
        global: bool,
    },

    /// Add a registry; prompts for anything not given
    Add {
        /// Unique name for the registry
        name: Option<String>,

        /// Registry URL, e.g. https://registry.npmjs.org/
        url: Option<String>,
    },

    /// Delete a registry
    #[command(alias = "rm")]
    Del {
        /// Name of the registry to delete
        name: String,
    },

    /// Show the active registry
    Current {
        /// Read .npmrc in the current directory instead of the global config
        #[arg(long)]
        local: bool,
    },

    /// Measure the response time of a registry
    Ping {
        /// Registry to probe (omit to choose interactively)
        name: Option<String>,
    },

    /// Create the registry list if it does not exist yet
    Init,

    /// Manage settings
    #[command(subcommand)]
    Config(ConfigSubcommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show current settings
    Show,

    /// Set a setting
    Set {
        /// Setting key (manager, ping_timeout_secs)
        key: String,
        /// Setting value
        value: String,
    },

    /// Get a specific setting
    Get {
        /// Setting key
        key: String,
    },
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub home: Option<PathBuf>,
    pub manager: Option<String>,
}

impl GlobalArgs {
    pub fn home(&self) -> Result<PathBuf> {
        store::home_dir(self.home.as_deref()).context("failed to locate home directory")
    }

    pub fn settings(&self) -> Result<Settings> {
        let home = self.home()?;
        store::load_settings(&home).context("failed to load settings")
    }

    /// Package manager binary after applying `--manager` over the settings file.
    pub fn manager_program(&self) -> Result<String> {
        Ok(self.settings()?.manager_program(self.manager.as_deref()))
    }
}

/// `--global` is the default; clap already rejects both flags together.
pub fn scope_from_flags(local: bool) -> Scope {
    if local { Scope::Local } else { Scope::Global }
}
