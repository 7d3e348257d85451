use soroban_sdk::{contractclient, log, Address, BytesN, Env, U256};

use crate::errors::ContractError;
use crate::group;
use crate::selection::select_beneficiary;
use crate::storage;
use crate::types::{GroupState, LumConfig};

/// Random words requested per draw.
pub const NUM_WORDS: u32 = 1;

/// The external randomness provider. A request returns an opaque id; the
/// provider later calls `deliver_randomness` on the consumer exactly once for it.
#[contractclient(name = "RandomnessCoordinatorClient")]
pub trait RandomnessCoordinator {
    fn request_randomness(
        env: Env,
        consumer: Address,
        key_hash: BytesN<32>,
        subscription_id: u64,
        min_confirmations: u32,
        callback_gas_limit: u32,
        num_words: u32,
    ) -> u64;
}

/// Ask the coordinator for a random value and return the correlation id.
/// The id must not already be bound to another outstanding request.
pub fn request(env: &Env, config: &LumConfig) -> Result<u64, ContractError> {
    let coordinator = RandomnessCoordinatorClient::new(env, &config.coordinator);
    let request_id = coordinator.request_randomness(
        &env.current_contract_address(),
        &config.key_hash,
        &config.subscription_id,
        &config.min_confirmations,
        &config.callback_gas_limit,
        &NUM_WORDS,
    );

    if storage::has_request(env, request_id) {
        return Err(ContractError::RequestIdInUse);
    }

    Ok(request_id)
}

/// Coordinator callback. Only the configured coordinator may deliver, and
/// only for the request currently pending on some group.
pub fn deliver_randomness(env: &Env, request_id: u64, value: U256) -> Result<(), ContractError> {
    let config = storage::get_config(env);
    config.coordinator.require_auth();

    let group_id = storage::get_request(env, request_id).ok_or(ContractError::UnknownRequest)?;
    let mut group = group::load(env, &group_id)?;

    if group.state != GroupState::AwaitingRandomness || group.pending_request != Some(request_id) {
        log!(env, "stale randomness delivery: {}", request_id);
        return Err(ContractError::NotAwaitingRandomness);
    }

    // Reduce against the membership as it is now, not as it was at request time.
    let beneficiary = select_beneficiary(env, &group.members, &value)?;

    group.beneficiary = Some(beneficiary.clone());
    group.pending_request = None;
    group.state = GroupState::BeneficiarySelected;

    group::save(env, &group)?;
    storage::remove_request(env, request_id);

    log!(env, "request {} selected {}", request_id, beneficiary);
    env.events().publish(
        (crate::symbol_short!("benef_sel"),),
        (group_id, request_id, beneficiary),
    );

    Ok(())
}
