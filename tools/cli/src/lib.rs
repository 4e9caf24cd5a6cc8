use clap::{ArgAction, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "condo-cli")]
#[command(about = "CLI tool for condominium treasury contract operations")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "~/.condo-treasury/config.toml")]
    pub config: PathBuf,

    /// Treasury contract ID (overrides the config file)
    #[arg(long, global = true)]
    pub contract_id: Option<String>,

    /// Print the stellar CLI invocation instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show CLI status
    Status,

    /// Show the treasury this CLI targets
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize a deployed treasury
    Init {
        /// Owner address
        #[arg(long)]
        owner: String,

        /// Token address (defaults to the configured token)
        #[arg(long)]
        token: Option<String>,

        /// Amount moved from the owner into the treasury
        #[arg(long, default_value_t = 0)]
        initial_funding: i128,
    },

    /// Register an authorized payer
    AddPayer {
        #[arg(long)]
        payer: String,

        #[arg(long)]
        name: String,
    },

    /// Grant or revoke a payer's deposit right
    SetPayerAuthorized {
        #[arg(long)]
        payer: String,

        #[arg(long, action = ArgAction::Set)]
        authorized: bool,
    },

    /// Deposit expenses as a registered payer
    PayExpenses {
        /// Payer address (defaults to the source account)
        #[arg(long)]
        payer: Option<String>,

        #[arg(long)]
        amount: i128,
    },

    /// Register an employee
    AddEmployee {
        #[arg(long)]
        employee: String,

        #[arg(long)]
        name: String,
    },

    /// Register a service provider
    AddService {
        #[arg(long)]
        service: String,

        #[arg(long)]
        name: String,
    },

    /// Pay a registered employee
    PayEmployee {
        #[arg(long)]
        index: u32,

        #[arg(long)]
        amount: i128,
    },

    /// Pay a registered service
    PayService {
        #[arg(long)]
        index: u32,

        #[arg(long)]
        amount: i128,
    },

    /// Pay an arbitrary address
    SpecificPayment {
        #[arg(long)]
        to: String,

        #[arg(long)]
        amount: i128,
    },

    /// Read a service record
    GetService {
        #[arg(long)]
        index: u32,
    },

    /// Read an employee record
    GetEmployee {
        #[arg(long)]
        index: u32,
    },

    /// Read the tracked treasury balance
    Balance,

    /// Hand the owner role to another address
    TransferOwnership {
        #[arg(long)]
        new_owner: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("Invalid address `{0}`: expected a 56 character G... account or C... contract")]
    InvalidAddress(String),

    #[error("Invalid amount {0}: must not be negative")]
    InvalidAmount(i128),

    #[error("No contract ID provided. Pass --contract-id or set contract.default_contract_id")]
    MissingContractId,

    #[error("No token provided. Pass --token or set contract.token")]
    MissingToken,

    #[error("No source account found. Set CONDO_SOURCE_ACCOUNT or auth.source_account")]
    MissingSourceAccount,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub contract: ContractConfig,
    pub auth: AuthConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network name passed to `stellar --network`
    pub name: String,
    pub rpc_url: String,
    pub network_passphrase: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContractConfig {
    pub default_contract_id: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Identity name or secret understood by `stellar --source`
    pub source_account: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub stellar_bin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig {
                name: "testnet".to_string(),
                rpc_url: "https://soroban-testnet.stellar.org:443".to_string(),
                network_passphrase: "Test SDF Network ; September 2015".to_string(),
            },
            contract: ContractConfig {
                default_contract_id: None,
                token: None,
            },
            auth: AuthConfig {
                source_account: None,
            },
            defaults: DefaultsConfig {
                stellar_bin: "stellar".to_string(),
            },
        }
    }
}

/// Where and as whom a contract call is submitted.
#[derive(Debug, Serialize)]
pub struct InvokeTarget {
    pub contract_id: String,
    pub source_account: String,
    pub network: String,
    pub rpc_url: String,
}

/// A single contract function call with its named arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub function: &'static str,
    pub args: Vec<(&'static str, String)>,
}

impl Invocation {
    pub fn new(function: &'static str) -> Self {
        Self {
            function,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, name: &'static str, value: impl ToString) -> Self {
        self.args.push((name, value.to_string()));
        self
    }

    /// Arguments for `stellar contract invoke`, excluding the binary name.
    pub fn to_cli_args(&self, target: &InvokeTarget) -> Vec<String> {
        let mut out = vec![
            "contract".to_string(),
            "invoke".to_string(),
            "--id".to_string(),
            target.contract_id.clone(),
            "--source-account".to_string(),
            target.source_account.clone(),
            "--rpc-url".to_string(),
            target.rpc_url.clone(),
            "--network".to_string(),
            target.network.clone(),
            "--".to_string(),
            self.function.to_string(),
        ];
        for (name, value) in &self.args {
            out.push(format!("--{}", name));
            out.push(value.clone());
        }
        out
    }
}

/// Checks the shape of a Stellar account (`G...`) or contract (`C...`) address.
pub fn validate_address(address: &str) -> Result<(), CliError> {
    let well_formed = address.len() == 56
        && (address.starts_with('G') || address.starts_with('C'))
        && address
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if well_formed {
        Ok(())
    } else {
        Err(CliError::InvalidAddress(address.to_string()))
    }
}

pub fn validate_amount(amount: i128) -> Result<(), CliError> {
    if amount < 0 {
        return Err(CliError::InvalidAmount(amount));
    }
    Ok(())
}

/// Maps a contract-level treasury call to its invocation.
///
/// `caller` is the identity that authenticates owner-only and deposit calls.
/// Returns `Ok(None)` for commands that are not contract calls.
pub fn build_invocation(
    command: &Commands,
    config: &Config,
    caller: &str,
) -> Result<Option<Invocation>, CliError> {
    let invocation = match command {
        Commands::Status | Commands::Info { .. } => return Ok(None),
        Commands::Init {
            owner,
            token,
            initial_funding,
        } => {
            validate_address(owner)?;
            let token = token
                .clone()
                .or_else(|| config.contract.token.clone())
                .ok_or(CliError::MissingToken)?;
            validate_address(&token)?;
            if *initial_funding < 0 {
                return Err(CliError::InvalidAmount(*initial_funding));
            }
            Invocation::new("initialize")
                .arg("owner", owner)
                .arg("token", token)
                .arg("initial_funding", initial_funding)
        }
        Commands::AddPayer { payer, name } => {
            validate_address(payer)?;
            Invocation::new("add_payer_user")
                .arg("caller", caller)
                .arg("payer", payer)
                .arg("name", name)
        }
        Commands::SetPayerAuthorized { payer, authorized } => {
            validate_address(payer)?;
            Invocation::new("set_payer_authorized")
                .arg("caller", caller)
                .arg("payer", payer)
                .arg("authorized", authorized)
        }
        Commands::PayExpenses { payer, amount } => {
            validate_amount(*amount)?;
            let payer = match payer {
                Some(payer) => {
                    validate_address(payer)?;
                    payer.as_str()
                }
                None => caller,
            };
            Invocation::new("pay_expenses")
                .arg("payer", payer)
                .arg("amount", amount)
        }
        Commands::AddEmployee { employee, name } => {
            validate_address(employee)?;
            Invocation::new("add_employee_user")
                .arg("caller", caller)
                .arg("employee", employee)
                .arg("name", name)
        }
        Commands::AddService { service, name } => {
            validate_address(service)?;
            Invocation::new("add_service")
                .arg("caller", caller)
                .arg("service", service)
                .arg("name", name)
        }
        Commands::PayEmployee { index, amount } => {
            validate_amount(*amount)?;
            Invocation::new("pay_employee")
                .arg("caller", caller)
                .arg("index", index)
                .arg("amount", amount)
        }
        Commands::PayService { index, amount } => {
            validate_amount(*amount)?;
            Invocation::new("pay_service")
                .arg("caller", caller)
                .arg("index", index)
                .arg("amount", amount)
        }
        Commands::SpecificPayment { to, amount } => {
            validate_address(to)?;
            validate_amount(*amount)?;
            Invocation::new("specific_payment")
                .arg("caller", caller)
                .arg("to", to)
                .arg("amount", amount)
        }
        Commands::GetService { index } => Invocation::new("get_service").arg("index", index),
        Commands::GetEmployee { index } => Invocation::new("get_employee").arg("index", index),
        Commands::Balance => Invocation::new("get_balance"),
        Commands::TransferOwnership { new_owner } => {
            validate_address(new_owner)?;
            Invocation::new("transfer_ownership")
                .arg("caller", caller)
                .arg("new_owner", new_owner)
        }
    };
    Ok(Some(invocation))
}
