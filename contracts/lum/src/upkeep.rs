use soroban_sdk::{log, BytesN, Env, Vec};

use crate::errors::ContractError;
use crate::group;
use crate::randomness;
use crate::storage;
use crate::types::{GroupState, LumConfig, LumGroup, UpkeepCheck};

/// A group is due once it is fully funded, holds a balance, and the
/// configured interval has passed since funding completed.
fn is_due(env: &Env, config: &LumConfig, group: &LumGroup) -> bool {
    let elapsed = env.ledger().timestamp().saturating_sub(group.last_trigger);
    group.state == GroupState::AwaitingUpkeep && elapsed >= config.interval && group.balance > 0
}

pub fn check_upkeep(env: &Env, group_id: BytesN<32>) -> Result<UpkeepCheck, ContractError> {
    let config = storage::get_config(env);
    let group = group::load(env, &group_id)?;

    Ok(UpkeepCheck {
        due: is_due(env, &config, &group),
        payload: group_id,
    })
}

/// Due groups among registry positions `start..start + limit`. Keepers page
/// through the registry with successive windows.
pub fn pending_upkeeps(env: &Env, start: u32, limit: u32) -> Vec<BytesN<32>> {
    let config = storage::get_config(env);
    let end = start
        .saturating_add(limit)
        .min(storage::get_group_counter(env));
    let mut due = Vec::new(env);

    for index in start..end {
        let Some(group_id) = storage::get_group_id_at(env, index) else {
            continue;
        };
        if let Some(group) = storage::get_group(env, &group_id) {
            if is_due(env, &config, &group) {
                due.push_back(group_id);
            }
        }
    }

    due
}

/// Issue the randomness request for a due group. The eligibility check is
/// repeated here; an earlier `check_upkeep` answer is never trusted.
pub fn perform_upkeep(env: &Env, payload: BytesN<32>) -> Result<u64, ContractError> {
    let config = storage::get_config(env);
    let mut group = group::load(env, &payload)?;

    if !is_due(env, &config, &group) {
        return Err(ContractError::UpkeepNotNeeded);
    }

    let request_id = randomness::request(env, &config)?;

    group.pending_request = Some(request_id);
    group.state = GroupState::AwaitingRandomness;
    group.last_trigger = env.ledger().timestamp();

    group::save(env, &group)?;
    storage::set_request(env, request_id, &payload);

    log!(env, "randomness requested: {}", request_id);
    env.events().publish(
        (crate::symbol_short!("rnd_req"),),
        (payload, request_id),
    );

    Ok(request_id)
}
