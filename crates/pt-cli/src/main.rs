use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pt_core::{Clock, SystemClock};
use pt_store::Store;

use pt_cli::commands::{create, delete, list, report, start, stats, status, stop};
use pt_cli::{Cli, Commands, Config};

/// Load config and build the snapshot store, ensuring the parent directory
/// exists.
fn open_store(config_path: Option<&Path>) -> Result<Store> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.data_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    Ok(Store::new(&config.data_path))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let store = open_store(cli.config.as_deref())?;
    let mut data = store.load().context("failed to load tracker data")?;

    // One instant per invocation; every core operation sees the same `now`.
    let now = SystemClock.now();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Create { name } => {
            create::run(&mut out, &mut data, name)?;
            store.save(&data)?;
        }
        Commands::Delete { name, yes } => {
            let stdin = std::io::stdin();
            let mutated = delete::run(&mut out, &mut stdin.lock(), &mut data, name, *yes)?;
            if mutated {
                store.save(&data)?;
            }
        }
        Commands::Start { name } => {
            start::run(&mut out, &mut data, name, now)?;
            store.save(&data)?;
        }
        Commands::Stop { name } => {
            stop::run(&mut out, &mut data, name, now)?;
            store.save(&data)?;
        }
        Commands::Status => status::run(&mut out, &data, now)?,
        Commands::Stats { name } => stats::run(&mut out, &data, name, now)?,
        Commands::Report { json } => report::run(&mut out, &data, now, *json)?,
        Commands::List => list::run(&mut out, &data)?,
    }

    Ok(())
}
