use anyhow::Result;
use condo_cli::{CliError, Config};
use std::path::{Path, PathBuf};
use tokio::fs;

pub fn expand_home(config_path: &Path) -> Result<PathBuf> {
    if !config_path.starts_with("~") {
        return Ok(config_path.to_path_buf());
    }
    let home_dir =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
    let path_str = config_path.to_string_lossy();
    let without_tilde = &path_str[1..];
    Ok(home_dir.join(without_tilde.trim_start_matches('/')))
}

pub async fn load_config(config_path: &Path) -> Result<Config> {
    let expanded_path = expand_home(config_path)?;

    if !expanded_path.exists() {
        let default_config = Config::default();
        create_config_file(&expanded_path, &default_config).await?;
        return Ok(default_config);
    }

    let config_content = fs::read_to_string(&expanded_path).await?;
    let config: Config = toml::from_str(&config_content)?;

    Ok(config)
}

async fn create_config_file(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let config_content = toml::to_string_pretty(config)?;
    fs::write(path, config_content).await?;

    log::info!("Created default config file at: {}", path.display());

    Ok(())
}

/// Identity that signs transactions: environment first, then config file.
pub fn get_source_account(config: &Config) -> Result<String, CliError> {
    if let Ok(account) = std::env::var("CONDO_SOURCE_ACCOUNT") {
        if !account.is_empty() {
            return Ok(account);
        }
    }

    config
        .auth
        .source_account
        .clone()
        .ok_or(CliError::MissingSourceAccount)
}

pub fn get_contract_id(cli_value: Option<String>, config: &Config) -> Result<String, CliError> {
    cli_value
        .or_else(|| config.contract.default_contract_id.clone())
        .ok_or(CliError::MissingContractId)
}
