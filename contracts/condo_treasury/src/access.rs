use soroban_sdk::{log, Address, Env};

use crate::errors::TreasuryError;
use crate::storage::{read_config, TreasuryConfig};

/// Owner guard run at the top of every owner-restricted entry point.
///
/// The caller must authenticate, and must match the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<TreasuryConfig, TreasuryError> {
    caller.require_auth();

    let config = read_config(env)?;
    if *caller != config.owner {
        log!(env, "owner check failed for {}", caller.clone());
        return Err(TreasuryError::NotOwner);
    }
    Ok(config)
}

/// Zero is accepted; callers treat it as a no-op.
pub fn require_non_negative(amount: i128) -> Result<(), TreasuryError> {
    if amount < 0 {
        return Err(TreasuryError::InvalidAmount);
    }
    Ok(())
}
