//! CLI entry point.
//!
//! Parses arguments, sets up logging, resolves configuration and
//! dispatches to a handler. Errors are printed once here and mapped to an
//! exit code.

use std::io::{self, Write};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use procmgr_cli::handlers::kill::KillOptions;
use procmgr_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers, is_broken_pipe};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // The reader of our output went away (`procmgr list | head`)
        if is_broken_pipe(&err) {
            return;
        }
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // .env values never override variables already set in the environment
    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    let mut out = io::stdout();

    let Some(command) = cli.command else {
        Cli::command().write_help(&mut out)?;
        writeln!(out)?;
        return Ok(());
    };

    let config = CliConfig::from_env()?.with_sample_interval_ms(cli.interval_ms);
    let ctx = bootstrap(config)?;

    match command {
        Commands::List { filter, json } => {
            handlers::list::execute(&ctx, filter.as_deref(), json, &mut out).await?;
        }
        Commands::Show { pid, json } => {
            handlers::show::execute(&ctx, pid, json, &mut out).await?;
        }
        Commands::Kill { pid, force, wait } => {
            let options = KillOptions { force, wait };
            let mut answers = io::stdin().lock();
            handlers::kill::execute(&ctx, pid, options, &mut answers, &mut out).await?;
        }
        Commands::Start { path, args } => {
            handlers::start::execute(&ctx, &path, &args, &mut out).await?;
        }
    }

    out.flush()?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
