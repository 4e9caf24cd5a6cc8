#![no_std]

mod access;
mod errors;
mod events;
mod storage;

pub use errors::TreasuryError;
pub use storage::{EmployeeRecord, PayerUser, ServiceRecord, TreasuryConfig};

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String};

use access::{require_non_negative, require_owner};
use events::{
    EmployeeAdded, EmployeePaid, ExpensesPaid, OwnershipTransferred, PayerAuthorizationChanged,
    PayerUserAdded, ServiceAdded, ServicePaid, SpecificPaymentMade, TreasuryInitialized,
};

/// Shared treasury of a condominium.
///
/// The owner keeps three registries (payers, employees and services).
/// Registered payers deposit the configured token through `pay_expenses`, and
/// the owner pays employees, services or arbitrary addresses out of the
/// tracked balance.
///
/// # Security Model
///
/// - Every mutating entry point authenticates its `caller`
/// - Registry changes and all disbursements are owner-only
/// - The balance is debited before the outbound transfer and restored if the
///   token contract rejects it
#[contract]
pub struct CondoTreasuryContract;

/// Moves `amount` of `token` out of the treasury to `to`.
///
/// The tracked balance is written before the token is invoked. A rejected
/// transfer restores it and yields `TransferFailed`. A zero amount does not
/// touch the token.
fn disburse(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), TreasuryError> {
    require_non_negative(amount)?;
    if amount == 0 {
        return Ok(());
    }

    let balance = storage::read_balance(env);
    if amount > balance {
        log!(env, "disbursement of {} exceeds balance {}", amount, balance);
        return Err(TreasuryError::InsufficientBalance);
    }
    storage::write_balance(env, balance - amount);

    let token_client = token::Client::new(env, token);
    let transferred = matches!(
        token_client.try_transfer(&env.current_contract_address(), to, &amount),
        Ok(Ok(()))
    );
    if !transferred {
        storage::write_balance(env, balance);
        log!(env, "transfer of {} to {} rejected", amount, to.clone());
        return Err(TreasuryError::TransferFailed);
    }
    Ok(())
}

#[contractimpl]
impl CondoTreasuryContract {
    /// Initializes the treasury.
    ///
    /// # Arguments
    ///
    /// * `owner` - Administrator of the registries (must authenticate)
    /// * `token` - Token the treasury holds and pays out
    /// * `initial_funding` - Amount moved from `owner` into the treasury, may be 0
    ///
    /// # Errors
    ///
    /// * `AlreadyInitialized` on a second call
    /// * `InvalidAmount` for negative funding
    /// * `TransferFailed` if the owner cannot fund the treasury
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        initial_funding: i128,
    ) -> Result<(), TreasuryError> {
        owner.require_auth();

        if storage::is_initialized(&env) {
            return Err(TreasuryError::AlreadyInitialized);
        }
        if initial_funding < 0 {
            return Err(TreasuryError::InvalidAmount);
        }

        if initial_funding > 0 {
            let token_client = token::Client::new(&env, &token);
            let funded = matches!(
                token_client.try_transfer(
                    &owner,
                    &env.current_contract_address(),
                    &initial_funding
                ),
                Ok(Ok(()))
            );
            if !funded {
                return Err(TreasuryError::TransferFailed);
            }
        }

        storage::write_config(
            &env,
            &TreasuryConfig {
                owner: owner.clone(),
                token: token.clone(),
            },
        );
        storage::write_balance(&env, initial_funding);

        events::emit_treasury_initialized(
            &env,
            TreasuryInitialized {
                owner,
                token,
                initial_balance: initial_funding,
            },
        );
        Ok(())
    }

    /// Registers `payer` as an authorized depositor.
    ///
    /// Adding an address that is already registered overwrites its name and
    /// re-authorizes it.
    pub fn add_payer_user(
        env: Env,
        caller: Address,
        payer: Address,
        name: String,
    ) -> Result<(), TreasuryError> {
        require_owner(&env, &caller)?;

        storage::write_payer(
            &env,
            &PayerUser {
                address: payer.clone(),
                name: name.clone(),
                authorized: true,
            },
        );

        events::emit_payer_user_added(&env, PayerUserAdded { payer, name });
        Ok(())
    }

    /// Grants or revokes the deposit right of an existing payer.
    pub fn set_payer_authorized(
        env: Env,
        caller: Address,
        payer: Address,
        authorized: bool,
    ) -> Result<(), TreasuryError> {
        require_owner(&env, &caller)?;

        let mut record = storage::read_payer(&env, &payer).ok_or(TreasuryError::PayerNotFound)?;
        record.authorized = authorized;
        storage::write_payer(&env, &record);

        events::emit_payer_authorization_changed(
            &env,
            PayerAuthorizationChanged { payer, authorized },
        );
        Ok(())
    }

    /// Deposits `amount` from a registered payer into the treasury.
    ///
    /// # Errors
    ///
    /// * `UnauthorizedPayer` if `payer` was never added or has been revoked
    /// * `InvalidAmount` for negative amounts
    /// * `TransferFailed` if the token contract rejects the deposit
    /// * `BalanceOverflow` if the tracked balance cannot hold the deposit
    ///
    /// A zero deposit succeeds without invoking the token.
    pub fn pay_expenses(env: Env, payer: Address, amount: i128) -> Result<(), TreasuryError> {
        payer.require_auth();

        let config = storage::read_config(&env)?;
        let authorized = storage::read_payer(&env, &payer)
            .map(|record| record.authorized)
            .unwrap_or(false);
        if !authorized {
            log!(&env, "rejected deposit from unregistered payer {}", payer.clone());
            return Err(TreasuryError::UnauthorizedPayer);
        }
        require_non_negative(amount)?;

        let balance = storage::read_balance(&env)
            .checked_add(amount)
            .ok_or(TreasuryError::BalanceOverflow)?;

        if amount > 0 {
            let token_client = token::Client::new(&env, &config.token);
            let deposited = matches!(
                token_client.try_transfer(&payer, &env.current_contract_address(), &amount),
                Ok(Ok(()))
            );
            if !deposited {
                return Err(TreasuryError::TransferFailed);
            }
        }
        storage::write_balance(&env, balance);

        events::emit_expenses_paid(
            &env,
            ExpensesPaid {
                payer,
                amount,
                balance,
            },
        );
        Ok(())
    }

    /// Appends an employee to the registry and returns its index.
    pub fn add_employee_user(
        env: Env,
        caller: Address,
        employee: Address,
        name: String,
    ) -> Result<u32, TreasuryError> {
        require_owner(&env, &caller)?;

        let index = storage::push_employee(&env, employee.clone(), name);
        events::emit_employee_added(&env, EmployeeAdded { index, employee });
        Ok(index)
    }

    /// Appends a service provider to the registry and returns its index.
    pub fn add_service(
        env: Env,
        caller: Address,
        service: Address,
        name: String,
    ) -> Result<u32, TreasuryError> {
        require_owner(&env, &caller)?;

        let index = storage::push_service(&env, service.clone(), name);
        events::emit_service_added(&env, ServiceAdded { index, service });
        Ok(index)
    }

    /// Pays `amount` to the employee registered at `index`.
    ///
    /// # Errors
    ///
    /// * `NotOwner` unless `caller` is the owner
    /// * `EmployeeNotFound` if `index` is out of range
    /// * `InvalidAmount`, `InsufficientBalance`, `TransferFailed`
    pub fn pay_employee(
        env: Env,
        caller: Address,
        index: u32,
        amount: i128,
    ) -> Result<(), TreasuryError> {
        let config = require_owner(&env, &caller)?;
        let employee = storage::read_employee(&env, index)?;

        disburse(&env, &config.token, &employee.address, amount)?;

        events::emit_employee_paid(
            &env,
            EmployeePaid {
                index,
                employee: employee.address,
                amount,
            },
        );
        Ok(())
    }

    /// Pays `amount` to the service registered at `index`.
    ///
    /// Same contract as `pay_employee`, with `ServiceNotFound` for an invalid
    /// index.
    pub fn pay_service(
        env: Env,
        caller: Address,
        index: u32,
        amount: i128,
    ) -> Result<(), TreasuryError> {
        let config = require_owner(&env, &caller)?;
        let service = storage::read_service(&env, index)?;

        disburse(&env, &config.token, &service.address, amount)?;

        events::emit_service_paid(
            &env,
            ServicePaid {
                index,
                service: service.address,
                amount,
            },
        );
        Ok(())
    }

    /// Pays `amount` to any address, bypassing the registries.
    pub fn specific_payment(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TreasuryError> {
        let config = require_owner(&env, &caller)?;

        disburse(&env, &config.token, &to, amount)?;

        events::emit_specific_payment_made(&env, SpecificPaymentMade { to, amount });
        Ok(())
    }

    /// Hands the owner role to `new_owner`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), TreasuryError> {
        let mut config = require_owner(&env, &caller)?;

        config.owner = new_owner.clone();
        storage::write_config(&env, &config);

        events::emit_ownership_transferred(
            &env,
            OwnershipTransferred {
                previous_owner: caller,
                new_owner,
            },
        );
        Ok(())
    }

    pub fn get_service(env: Env, index: u32) -> Result<ServiceRecord, TreasuryError> {
        storage::read_service(&env, index)
    }

    pub fn get_employee(env: Env, index: u32) -> Result<EmployeeRecord, TreasuryError> {
        storage::read_employee(&env, index)
    }

    pub fn get_payer_user(env: Env, payer: Address) -> Result<PayerUser, TreasuryError> {
        storage::read_payer(&env, &payer).ok_or(TreasuryError::PayerNotFound)
    }

    /// Whether `payer` may currently call `pay_expenses`.
    pub fn is_authorized_payer(env: Env, payer: Address) -> bool {
        storage::read_payer(&env, &payer)
            .map(|record| record.authorized)
            .unwrap_or(false)
    }

    pub fn employee_count(env: Env) -> u32 {
        storage::employee_count(&env)
    }

    pub fn service_count(env: Env) -> u32 {
        storage::service_count(&env)
    }

    /// Tracked balance. Tokens sent to the contract outside `pay_expenses`
    /// are not included.
    pub fn get_balance(env: Env) -> i128 {
        storage::read_balance(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, TreasuryError> {
        storage::read_config(&env).map(|config| config.owner)
    }

    pub fn get_config(env: Env) -> Result<TreasuryConfig, TreasuryError> {
        storage::read_config(&env)
    }
}

#[cfg(test)]
mod tests;
