use soroban_sdk::{Address, Env, Vec, U256};

use crate::errors::ContractError;

/// Maps a delivered random value onto a member slot: `value mod member_count`.
///
/// The reduction runs over the full 256-bit value so every member has the
/// same chance regardless of payment order.
pub fn beneficiary_index(
    env: &Env,
    value: &U256,
    member_count: u32,
) -> Result<u32, ContractError> {
    if member_count == 0 {
        return Err(ContractError::InvariantViolation);
    }
    let modulus = U256::from_u32(env, member_count);
    let index = value
        .rem_euclid(&modulus)
        .to_u128()
        .ok_or(ContractError::ArithmeticOverflow)?;
    // index < member_count <= u32::MAX
    Ok(index as u32)
}

/// Picks the beneficiary out of the current member list.
pub fn select_beneficiary(
    env: &Env,
    members: &Vec<Address>,
    value: &U256,
) -> Result<Address, ContractError> {
    let index = beneficiary_index(env, value, members.len())?;
    members.get(index).ok_or(ContractError::InvariantViolation)
}
