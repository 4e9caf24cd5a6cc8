use soroban_sdk::{contracttype, Address, Env, String};

use crate::errors::TreasuryError;

/// Address allowed to deposit into the treasury through `pay_expenses`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayerUser {
    pub address: Address,
    pub name: String,
    pub authorized: bool,
}

/// Registered employee. `index` is its position in the registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeRecord {
    pub index: u32,
    pub address: Address,
    pub name: String,
}

/// Registered service provider. Same indexing rules as employees.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceRecord {
    pub index: u32,
    pub address: Address,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasuryConfig {
    pub owner: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Owner and token, written once by `initialize`
    Config,
    /// Tracked treasury balance: i128
    Balance,
    /// Payer registry: address -> PayerUser
    PayerUser(Address),
    /// Number of employees ever registered
    EmployeeCount,
    /// Employee registry: index -> EmployeeRecord
    Employee(u32),
    /// Number of services ever registered
    ServiceCount,
    /// Service registry: index -> ServiceRecord
    Service(u32),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&StorageKey::Config)
}

pub fn read_config(env: &Env) -> Result<TreasuryConfig, TreasuryError> {
    env.storage()
        .persistent()
        .get(&StorageKey::Config)
        .ok_or(TreasuryError::NotInitialized)
}

pub fn write_config(env: &Env, config: &TreasuryConfig) {
    env.storage().persistent().set(&StorageKey::Config, config);
}

pub fn read_balance(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&StorageKey::Balance)
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, balance: i128) {
    env.storage().persistent().set(&StorageKey::Balance, &balance);
}

pub fn read_payer(env: &Env, payer: &Address) -> Option<PayerUser> {
    env.storage()
        .persistent()
        .get(&StorageKey::PayerUser(payer.clone()))
}

pub fn write_payer(env: &Env, payer: &PayerUser) {
    env.storage()
        .persistent()
        .set(&StorageKey::PayerUser(payer.address.clone()), payer);
}

pub fn employee_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&StorageKey::EmployeeCount)
        .unwrap_or(0)
}

pub fn read_employee(env: &Env, index: u32) -> Result<EmployeeRecord, TreasuryError> {
    if index >= employee_count(env) {
        return Err(TreasuryError::EmployeeNotFound);
    }
    env.storage()
        .persistent()
        .get(&StorageKey::Employee(index))
        .ok_or(TreasuryError::EmployeeNotFound)
}

/// Appends an employee and returns the index it was stored under.
pub fn push_employee(env: &Env, address: Address, name: String) -> u32 {
    let index = employee_count(env);
    let record = EmployeeRecord {
        index,
        address,
        name,
    };
    env.storage()
        .persistent()
        .set(&StorageKey::Employee(index), &record);
    let next = index.checked_add(1).expect("Employee index overflow");
    env.storage()
        .persistent()
        .set(&StorageKey::EmployeeCount, &next);
    index
}

pub fn service_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&StorageKey::ServiceCount)
        .unwrap_or(0)
}

pub fn read_service(env: &Env, index: u32) -> Result<ServiceRecord, TreasuryError> {
    if index >= service_count(env) {
        return Err(TreasuryError::ServiceNotFound);
    }
    env.storage()
        .persistent()
        .get(&StorageKey::Service(index))
        .ok_or(TreasuryError::ServiceNotFound)
}

/// Appends a service and returns the index it was stored under.
pub fn push_service(env: &Env, address: Address, name: String) -> u32 {
    let index = service_count(env);
    let record = ServiceRecord {
        index,
        address,
        name,
    };
    env.storage()
        .persistent()
        .set(&StorageKey::Service(index), &record);
    let next = index.checked_add(1).expect("Service index overflow");
    env.storage()
        .persistent()
        .set(&StorageKey::ServiceCount, &next);
    index
}
