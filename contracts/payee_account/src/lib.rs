#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env, String};

/// Named receiver of treasury payouts (an employee or a service provider).
///
/// It only holds whatever tokens are sent to its address. There is no
/// outbound operation.
#[contract]
pub struct PayeeAccountContract;

#[contracttype]
#[derive(Clone)]
enum StorageKey {
    Name,
}

#[contractimpl]
impl PayeeAccountContract {
    /// Stores the display name. Callable once.
    pub fn initialize(env: Env, name: String) {
        assert!(
            !env.storage().persistent().has(&StorageKey::Name),
            "Contract already initialized"
        );
        env.storage().persistent().set(&StorageKey::Name, &name);
    }

    pub fn name(env: Env) -> String {
        env.storage()
            .persistent()
            .get(&StorageKey::Name)
            .expect("Contract not initialized")
    }

    /// Amount of `token` held by this account.
    pub fn balance(env: Env, token: Address) -> i128 {
        token::Client::new(&env, &token).balance(&env.current_contract_address())
    }
}
