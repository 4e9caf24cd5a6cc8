use clap::Parser;
use std::process;

mod commands;
mod config;
mod utils;

use commands::*;
use condo_cli::{build_invocation, Cli, Commands};
use config::*;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = match load_config(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    let result = match &cli.command {
        Commands::Status => status_command(&config, &cli.config).await,
        Commands::Info { json } => info_command(cli.contract_id.clone(), &config, *json).await,
        command => run_contract_command(command, &cli, &config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run_contract_command(
    command: &Commands,
    cli: &Cli,
    config: &condo_cli::Config,
) -> anyhow::Result<()> {
    let caller = get_source_account(config)?;
    match build_invocation(command, config, &caller)? {
        Some(invocation) => {
            invoke_command(invocation, cli.contract_id.clone(), config, cli.dry_run).await
        }
        None => Ok(()),
    }
}
