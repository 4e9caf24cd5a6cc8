mod test_registry;

use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::testutils::{Address as _, StellarAssetContract};
use soroban_sdk::{Address, Env};

use crate::{CondoTreasuryContract, CondoTreasuryContractClient};

pub(crate) struct Setup {
    pub env: Env,
    pub client: CondoTreasuryContractClient<'static>,
    pub contract_id: Address,
    pub owner: Address,
    pub token: Address,
    pub token_sac: StellarAssetContract,
}

/// Registers a token and an initialized treasury funded with `initial_funding`.
pub(crate) fn setup(initial_funding: i128) -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let token_admin = Address::generate(&env);
    let token_sac = env.register_stellar_asset_contract_v2(token_admin);
    let token = token_sac.address();

    let contract_id = env.register(CondoTreasuryContract, ());
    let client = CondoTreasuryContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    mint(&env, &token, &owner, 1_000);
    client.initialize(&owner, &token, &initial_funding);

    Setup {
        env,
        client,
        contract_id,
        owner,
        token,
        token_sac,
    }
}

pub(crate) fn mint(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub(crate) fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    TokenClient::new(env, token).balance(who)
}
