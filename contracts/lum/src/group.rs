use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Map, String, Vec};

use crate::errors::ContractError;
use crate::invariants::{check_group, is_member};
use crate::storage;
use crate::types::{GroupState, LumGroup, GROUP_CAPACITY, MAX_NAME_LEN};

/// Group id for `name` created at registry position `nonce`:
/// `sha256(xdr(name) || nonce as big-endian u32)`.
pub fn compute_group_id(env: &Env, name: &String, nonce: u32) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.append(&name.clone().to_xdr(env));
    preimage.extend_from_array(&nonce.to_be_bytes());
    env.crypto().sha256(&preimage).to_bytes()
}

pub fn create_group(
    env: &Env,
    creator: Address,
    name: String,
) -> Result<BytesN<32>, ContractError> {
    creator.require_auth();

    if name.len() == 0 || name.len() > MAX_NAME_LEN {
        return Err(ContractError::InvalidName);
    }

    let nonce = storage::get_group_counter(env);
    let group_id = compute_group_id(env, &name, nonce);
    let next = nonce.checked_add(1).ok_or(ContractError::ArithmeticOverflow)?;

    let mut members = Vec::new(env);
    members.push_back(creator.clone());

    let now = env.ledger().timestamp();
    let group = LumGroup {
        id: group_id.clone(),
        name,
        creator: creator.clone(),
        members,
        deposits: Map::new(env),
        balance: 0,
        state: GroupState::Filling,
        cycle: 0,
        last_trigger: now,
        pending_request: None,
        beneficiary: None,
        created_at: now,
    };

    save(env, &group)?;
    storage::set_group_id_at(env, nonce, &group_id);
    storage::set_group_counter(env, next);
    storage::add_member_group(env, &creator, &group_id);

    env.events().publish(
        (crate::symbol_short!("grp_creat"),),
        (group_id.clone(), creator),
    );

    Ok(group_id)
}

pub fn join_group(env: &Env, member: Address, group_id: BytesN<32>) -> Result<(), ContractError> {
    member.require_auth();

    let mut group = load(env, &group_id)?;

    if group.state == GroupState::Closed {
        return Err(ContractError::StateMismatch);
    }

    if group.members.len() >= GROUP_CAPACITY {
        return Err(ContractError::GroupFull);
    }

    if is_member(&group, &member) {
        return Err(ContractError::AlreadyMember);
    }

    group.members.push_back(member.clone());
    if group.members.len() == GROUP_CAPACITY && group.state == GroupState::Filling {
        group.state = GroupState::Funding;
    }

    save(env, &group)?;
    storage::add_member_group(env, &member, &group_id);

    env.events()
        .publish((crate::symbol_short!("grp_join"),), (group_id, member));

    Ok(())
}

/// Retire a group. Only its creator can do this, and only while no deposit
/// of the current cycle is held.
pub fn close_group(env: &Env, creator: Address, group_id: BytesN<32>) -> Result<(), ContractError> {
    creator.require_auth();

    let mut group = load(env, &group_id)?;

    if creator != group.creator {
        return Err(ContractError::NotGroupCreator);
    }

    match group.state {
        GroupState::Filling | GroupState::Funding if group.balance == 0 => {}
        _ => return Err(ContractError::StateMismatch),
    }

    group.state = GroupState::Closed;
    save(env, &group)?;
    for member in group.members.iter() {
        storage::remove_member_group(env, &member, &group_id);
    }

    env.events()
        .publish((crate::symbol_short!("grp_close"),), group_id);

    Ok(())
}

pub fn number_of_groups(env: &Env) -> u32 {
    storage::get_group_counter(env)
}

pub fn group_id_at(env: &Env, index: u32) -> Result<BytesN<32>, ContractError> {
    storage::get_group_id_at(env, index).ok_or(ContractError::GroupNotFound)
}

pub fn get_group(env: &Env, group_id: BytesN<32>) -> Result<LumGroup, ContractError> {
    load(env, &group_id)
}

pub fn number_of_members(env: &Env, group_id: BytesN<32>) -> Result<u32, ContractError> {
    Ok(load(env, &group_id)?.members.len())
}

pub fn balance_of(env: &Env, group_id: BytesN<32>) -> Result<i128, ContractError> {
    Ok(load(env, &group_id)?.balance)
}

pub fn payment_status(
    env: &Env,
    member: Address,
    group_id: BytesN<32>,
) -> Result<bool, ContractError> {
    let group = load(env, &group_id)?;
    if !is_member(&group, &member) {
        return Err(ContractError::CallerNotMember);
    }
    Ok(group
        .deposits
        .get(member)
        .map(|deposit| deposit.has_paid)
        .unwrap_or(false))
}

pub fn get_member_groups(env: &Env, member: Address) -> Vec<BytesN<32>> {
    storage::get_member_groups(env, &member)
}

pub(crate) fn load(env: &Env, group_id: &BytesN<32>) -> Result<LumGroup, ContractError> {
    storage::get_group(env, group_id).ok_or(ContractError::GroupNotFound)
}

/// Persist a group after checking its invariants.
pub(crate) fn save(env: &Env, group: &LumGroup) -> Result<(), ContractError> {
    check_group(group)?;
    storage::set_group(env, group);
    Ok(())
}
