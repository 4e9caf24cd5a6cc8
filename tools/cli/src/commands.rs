use anyhow::Result;
use log::{debug, error, info, warn};
use std::path::Path;
use tokio::process::Command;

use crate::config::{get_contract_id, get_source_account};
use crate::utils::{format_amount, parse_contract_i128, STELLAR_DECIMALS};
use condo_cli::{Config, Invocation, InvokeTarget};

pub async fn status_command(config: &Config, config_path: &Path) -> Result<()> {
    println!("Condo Treasury CLI Status");
    println!("=========================");
    println!();

    println!("Configuration ({}):", config_path.display());
    println!("  Network: {}", config.network.name);
    println!("  Network RPC: {}", config.network.rpc_url);
    println!("  Network Passphrase: {}", config.network.network_passphrase);
    println!(
        "  Default Contract ID: {}",
        config
            .contract
            .default_contract_id
            .as_deref()
            .unwrap_or("Not set")
    );
    println!(
        "  Token: {}",
        config.contract.token.as_deref().unwrap_or("Not set")
    );
    println!(
        "  Source Account: {}",
        get_source_account(config).as_deref().unwrap_or("Not set")
    );
    println!();

    print!("Stellar CLI: ");
    match Command::new(&config.defaults.stellar_bin)
        .arg("--version")
        .output()
        .await
    {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout);
            println!("available ({})", version.lines().next().unwrap_or("").trim());
        }
        Ok(_) => println!("not working properly"),
        Err(_) => {
            println!("not found");
            println!("   Install with: cargo install --locked stellar-cli");
        }
    }

    Ok(())
}

pub async fn info_command(contract_id: Option<String>, config: &Config, json: bool) -> Result<()> {
    let contract_id = get_contract_id(contract_id, config)?;
    let target = InvokeTarget {
        contract_id,
        source_account: get_source_account(config).unwrap_or_default(),
        network: config.network.name.clone(),
        rpc_url: config.network.rpc_url.clone(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&target)?);
        return Ok(());
    }

    println!("Treasury Contract:");
    println!("  Contract ID: {}", target.contract_id);
    println!("  Network: {}", target.network);
    println!("  Network RPC: {}", target.rpc_url);
    Ok(())
}

/// Runs (or prints, with `dry_run`) one treasury contract call.
pub async fn invoke_command(
    invocation: Invocation,
    contract_id: Option<String>,
    config: &Config,
    dry_run: bool,
) -> Result<()> {
    let target = InvokeTarget {
        contract_id: get_contract_id(contract_id, config)?,
        source_account: get_source_account(config)?,
        network: config.network.name.clone(),
        rpc_url: config.network.rpc_url.clone(),
    };
    let args = invocation.to_cli_args(&target);

    if dry_run {
        println!("{} {}", config.defaults.stellar_bin, args.join(" "));
        return Ok(());
    }

    info!("Invoking {} on {}", invocation.function, target.contract_id);
    debug!("Command: {} {:?}", config.defaults.stellar_bin, args);

    let output = Command::new(&config.defaults.stellar_bin)
        .args(&args)
        .output()
        .await
        .map_err(|e| {
            error!("Could not run {}: {}", config.defaults.stellar_bin, e);
            anyhow::anyhow!("Stellar CLI not found")
        })?;

    if !output.status.success() {
        error!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        return Err(anyhow::anyhow!("Contract call {} failed", invocation.function));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if invocation.function == "get_balance" {
        match parse_contract_i128(&stdout) {
            Some(balance) => println!(
                "Treasury balance: {} ({} units)",
                format_amount(balance, STELLAR_DECIMALS),
                balance
            ),
            None => {
                warn!("Unexpected balance output");
                println!("{}", stdout.trim());
            }
        }
    } else if !stdout.trim().is_empty() {
        println!("{}", stdout.trim());
    }
    info!("Contract call {} succeeded", invocation.function);

    Ok(())
}
