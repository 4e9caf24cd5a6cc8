use soroban_sdk::{testutils::Address as _, Address, Env, String};

use super::{mint, setup};
use crate::{CondoTreasuryContract, CondoTreasuryContractClient, TreasuryError};

// --- Initialization ---

#[test]
fn test_initialize_sets_owner_and_token() {
    let s = setup(0);

    let config = s.client.get_config();
    assert_eq!(config.owner, s.owner);
    assert_eq!(config.token, s.token);
    assert_eq!(s.client.get_owner(), s.owner);
    assert_eq!(s.client.get_balance(), 0);
}

#[test]
fn test_initialize_twice_fails() {
    let s = setup(0);

    let result = s.client.try_initialize(&s.owner, &s.token, &0);
    assert_eq!(result, Err(Ok(TreasuryError::AlreadyInitialized)));
}

#[test]
fn test_initialize_negative_funding_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CondoTreasuryContract, ());
    let client = CondoTreasuryContractClient::new(&env, &contract_id);
    let owner = Address::generate(&env);
    let token = Address::generate(&env);

    let result = client.try_initialize(&owner, &token, &-1);
    assert_eq!(result, Err(Ok(TreasuryError::InvalidAmount)));
    assert_eq!(client.try_get_owner(), Err(Ok(TreasuryError::NotInitialized)));
}

#[test]
fn test_initialize_without_funds_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(CondoTreasuryContract, ());
    let client = CondoTreasuryContractClient::new(&env, &contract_id);
    let owner = Address::generate(&env);

    let result = client.try_initialize(&owner, &token, &10);
    assert_eq!(result, Err(Ok(TreasuryError::TransferFailed)));
    assert_eq!(client.try_get_config(), Err(Ok(TreasuryError::NotInitialized)));
}

#[test]
fn test_owner_only_before_initialize_reports_not_initialized() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CondoTreasuryContract, ());
    let client = CondoTreasuryContractClient::new(&env, &contract_id);
    let caller = Address::generate(&env);

    let result = client.try_add_employee_user(&caller, &caller, &String::from_str(&env, "x"));
    assert_eq!(result, Err(Ok(TreasuryError::NotInitialized)));
}

// --- Payer registry ---

#[test]
fn test_add_payer_user_by_owner() {
    let s = setup(0);
    let payer = Address::generate(&s.env);
    let name = String::from_str(&s.env, "User payer");

    s.client.add_payer_user(&s.owner, &payer, &name);

    let record = s.client.get_payer_user(&payer);
    assert_eq!(record.address, payer);
    assert_eq!(record.name, name);
    assert!(record.authorized);
    assert!(s.client.is_authorized_payer(&payer));
}

#[test]
fn test_add_payer_user_requires_owner_auth() {
    let s = setup(0);
    let payer = Address::generate(&s.env);

    s.client
        .add_payer_user(&s.owner, &payer, &String::from_str(&s.env, "User payer"));

    let auths = s.env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, s.owner);
}

#[test]
fn test_add_payer_user_by_non_owner_fails() {
    let s = setup(0);
    let intruder = Address::generate(&s.env);
    let payer = Address::generate(&s.env);

    let result = s.client.try_add_payer_user(
        &intruder,
        &payer,
        &String::from_str(&s.env, "User payer"),
    );
    assert_eq!(result, Err(Ok(TreasuryError::NotOwner)));
    assert!(!s.client.is_authorized_payer(&payer));
    assert_eq!(
        TreasuryError::NotOwner.message(),
        "Ownable: caller is not the owner"
    );
}

#[test]
fn test_readding_payer_overwrites_record() {
    let s = setup(0);
    let payer = Address::generate(&s.env);

    s.client
        .add_payer_user(&s.owner, &payer, &String::from_str(&s.env, "First"));
    s.client.set_payer_authorized(&s.owner, &payer, &false);
    s.client
        .add_payer_user(&s.owner, &payer, &String::from_str(&s.env, "Second"));

    let record = s.client.get_payer_user(&payer);
    assert_eq!(record.name, String::from_str(&s.env, "Second"));
    assert!(record.authorized);
}

#[test]
fn test_revoked_payer_cannot_deposit() {
    let s = setup(0);
    let payer = Address::generate(&s.env);
    mint(&s.env, &s.token, &payer, 10);

    s.client
        .add_payer_user(&s.owner, &payer, &String::from_str(&s.env, "User payer"));
    s.client.set_payer_authorized(&s.owner, &payer, &false);

    assert!(!s.client.is_authorized_payer(&payer));
    let result = s.client.try_pay_expenses(&payer, &1);
    assert_eq!(result, Err(Ok(TreasuryError::UnauthorizedPayer)));
}

#[test]
fn test_set_payer_authorized_unknown_payer_fails() {
    let s = setup(0);
    let stranger = Address::generate(&s.env);

    let result = s.client.try_set_payer_authorized(&s.owner, &stranger, &true);
    assert_eq!(result, Err(Ok(TreasuryError::PayerNotFound)));
    assert_eq!(
        s.client.try_get_payer_user(&stranger),
        Err(Ok(TreasuryError::PayerNotFound))
    );
}

#[test]
fn test_set_payer_authorized_by_non_owner_fails() {
    let s = setup(0);
    let payer = Address::generate(&s.env);
    s.client
        .add_payer_user(&s.owner, &payer, &String::from_str(&s.env, "User payer"));

    let result = s.client.try_set_payer_authorized(&payer, &payer, &false);
    assert_eq!(result, Err(Ok(TreasuryError::NotOwner)));
    assert!(s.client.is_authorized_payer(&payer));
}

// --- Employee and service registries ---

#[test]
fn test_add_employee_user_assigns_sequential_indices() {
    let s = setup(0);
    let first = Address::generate(&s.env);
    let second = Address::generate(&s.env);

    let i0 = s
        .client
        .add_employee_user(&s.owner, &first, &String::from_str(&s.env, "Portero"));
    let i1 = s
        .client
        .add_employee_user(&s.owner, &second, &String::from_str(&s.env, "Limpieza"));

    assert_eq!(i0, 0);
    assert_eq!(i1, 1);
    assert_eq!(s.client.employee_count(), 2);

    let record = s.client.get_employee(&0);
    assert_eq!(record.index, 0);
    assert_eq!(record.address, first);
    assert_eq!(s.client.get_employee(&1).address, second);
}

#[test]
fn test_add_employee_user_by_non_owner_fails() {
    let s = setup(0);
    let intruder = Address::generate(&s.env);

    let result = s.client.try_add_employee_user(
        &intruder,
        &intruder,
        &String::from_str(&s.env, "Portero"),
    );
    assert_eq!(result, Err(Ok(TreasuryError::NotOwner)));
    assert_eq!(s.client.employee_count(), 0);
}

#[test]
fn test_get_employee_out_of_range_fails() {
    let s = setup(0);
    assert_eq!(
        s.client.try_get_employee(&0),
        Err(Ok(TreasuryError::EmployeeNotFound))
    );
}

#[test]
fn test_add_service_and_get_service() {
    let s = setup(0);
    let provider = Address::generate(&s.env);
    let name = String::from_str(&s.env, "Ascensores");

    let index = s.client.add_service(&s.owner, &provider, &name);

    assert_eq!(index, 0);
    assert_eq!(s.client.service_count(), 1);
    let record = s.client.get_service(&0);
    assert_eq!(record.index, 0);
    assert_eq!(record.address, provider);
    assert_eq!(record.name, name);
}

#[test]
fn test_get_service_out_of_range_fails() {
    let s = setup(0);
    let provider = Address::generate(&s.env);
    s.client
        .add_service(&s.owner, &provider, &String::from_str(&s.env, "Gas"));

    assert_eq!(
        s.client.try_get_service(&1),
        Err(Ok(TreasuryError::ServiceNotFound))
    );
}

#[test]
fn test_add_service_by_non_owner_fails() {
    let s = setup(0);
    let intruder = Address::generate(&s.env);

    let result =
        s.client
            .try_add_service(&intruder, &intruder, &String::from_str(&s.env, "Gas"));
    assert_eq!(result, Err(Ok(TreasuryError::NotOwner)));
    assert_eq!(s.client.service_count(), 0);
}

#[test]
fn test_indices_survive_later_insertions() {
    let s = setup(0);
    let addresses: [Address; 3] = [
        Address::generate(&s.env),
        Address::generate(&s.env),
        Address::generate(&s.env),
    ];

    for address in addresses.iter() {
        s.client
            .add_service(&s.owner, address, &String::from_str(&s.env, "svc"));
        s.client
            .add_employee_user(&s.owner, address, &String::from_str(&s.env, "emp"));
    }

    for (i, address) in addresses.iter().enumerate() {
        assert_eq!(s.client.get_service(&(i as u32)).address, *address);
        assert_eq!(s.client.get_employee(&(i as u32)).address, *address);
    }
}

// --- Ownership ---

#[test]
fn test_transfer_ownership_moves_owner_rights() {
    let s = setup(0);
    let new_owner = Address::generate(&s.env);
    let employee = Address::generate(&s.env);

    s.client.transfer_ownership(&s.owner, &new_owner);
    assert_eq!(s.client.get_owner(), new_owner);

    let result = s.client.try_add_employee_user(
        &s.owner,
        &employee,
        &String::from_str(&s.env, "Portero"),
    );
    assert_eq!(result, Err(Ok(TreasuryError::NotOwner)));

    let index = s
        .client
        .add_employee_user(&new_owner, &employee, &String::from_str(&s.env, "Portero"));
    assert_eq!(index, 0);
}

#[test]
fn test_transfer_ownership_by_non_owner_fails() {
    let s = setup(0);
    let intruder = Address::generate(&s.env);

    let result = s.client.try_transfer_ownership(&intruder, &intruder);
    assert_eq!(result, Err(Ok(TreasuryError::NotOwner)));
    assert_eq!(s.client.get_owner(), s.owner);
}
