use soroban_sdk::{panic_with_error, Address, BytesN, Env, Vec};

use crate::errors::ContractError;
use crate::types::{DataKey, LumConfig, LumGroup};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// --- Config ---

pub fn get_config(env: &Env) -> LumConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::InvalidConfig))
}

pub fn set_config(env: &Env, config: &LumConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// --- Group Counter ---

pub fn get_group_counter(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::GroupCounter)
        .unwrap_or(0)
}

pub fn set_group_counter(env: &Env, counter: u32) {
    env.storage()
        .instance()
        .set(&DataKey::GroupCounter, &counter);
    extend_instance_ttl(env);
}

// --- Group Index ---

pub fn get_group_id_at(env: &Env, index: u32) -> Option<BytesN<32>> {
    let key = DataKey::GroupIndex(index);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_group_id_at(env: &Env, index: u32, group_id: &BytesN<32>) {
    let key = DataKey::GroupIndex(index);
    env.storage().persistent().set(&key, group_id);
    extend_persistent_ttl(env, &key);
}

// --- Group ---

pub fn get_group(env: &Env, group_id: &BytesN<32>) -> Option<LumGroup> {
    let key = DataKey::Group(group_id.clone());
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_group(env: &Env, group: &LumGroup) {
    let key = DataKey::Group(group.id.clone());
    env.storage().persistent().set(&key, group);
    extend_persistent_ttl(env, &key);
}

// --- Randomness Requests ---

pub fn get_request(env: &Env, request_id: u64) -> Option<BytesN<32>> {
    env.storage().persistent().get(&DataKey::Request(request_id))
}

pub fn has_request(env: &Env, request_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Request(request_id))
}

pub fn set_request(env: &Env, request_id: u64, group_id: &BytesN<32>) {
    let key = DataKey::Request(request_id);
    env.storage().persistent().set(&key, group_id);
    extend_persistent_ttl(env, &key);
}

pub fn remove_request(env: &Env, request_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Request(request_id));
}

// --- Member Groups ---

pub fn get_member_groups(env: &Env, member: &Address) -> Vec<BytesN<32>> {
    let key = DataKey::MemberGroups(member.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(Vec::new(env))
}

pub fn add_member_group(env: &Env, member: &Address, group_id: &BytesN<32>) {
    let key = DataKey::MemberGroups(member.clone());
    let mut groups = get_member_groups(env, member);
    groups.push_back(group_id.clone());
    env.storage().persistent().set(&key, &groups);
    extend_persistent_ttl(env, &key);
}

pub fn remove_member_group(env: &Env, member: &Address, group_id: &BytesN<32>) {
    let key = DataKey::MemberGroups(member.clone());
    let groups = get_member_groups(env, member);
    let mut new_groups = Vec::new(env);
    for g in groups.iter() {
        if g != *group_id {
            new_groups.push_back(g);
        }
    }
    if new_groups.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &new_groups);
        extend_persistent_ttl(env, &key);
    }
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
