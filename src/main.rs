use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod manager;
mod model;
mod npmrc;
mod probe;
mod resolve;
mod store;
mod target;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(if cli.verbose { "xxg=debug" } else { "xxg=info" })
            }),
        )
        .init();

    let args = cli::GlobalArgs {
        home: cli.home,
        manager: cli.manager,
    };

    match cli.command {
        cli::Command::Ls => cli::list::run(&args),
        cli::Command::Use {
            name,
            local,
            global: _,
        } => cli::switch::run(&args, name, cli::scope_from_flags(local)),
        cli::Command::Add { name, url } => cli::add::run(&args, name, url),
        cli::Command::Del { name } => cli::remove::run(&args, name),
        cli::Command::Current { local } => cli::current::run(&args, local),
        cli::Command::Ping { name } => cli::ping::run(&args, name).await,
        cli::Command::Init => cli::init::run(&args),
        cli::Command::Config(cmd) => cli::config::run(&args, cmd),
    }
}
