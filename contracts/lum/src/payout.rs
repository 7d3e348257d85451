use soroban_sdk::{token, Address, BytesN, Env, Map};

use crate::errors::ContractError;
use crate::group;
use crate::storage;
use crate::types::GroupState;

/// Pay the pooled balance to the selected beneficiary and start the next cycle.
///
/// All bookkeeping is written before the token leaves the contract. If the
/// transfer fails the invocation returns `TransferFailed` and the host
/// discards the reset along with it.
pub fn withdraw(env: &Env, caller: Address, group_id: BytesN<32>) -> Result<i128, ContractError> {
    caller.require_auth();

    let config = storage::get_config(env);
    let mut group = group::load(env, &group_id)?;

    if group.beneficiary.as_ref() != Some(&caller) {
        return Err(ContractError::NotSelectedBeneficiary);
    }

    if group.balance == 0 {
        return Err(ContractError::NothingToWithdraw);
    }

    if group.state != GroupState::BeneficiarySelected {
        return Err(ContractError::StateMismatch);
    }

    let amount = group.balance;

    // Reset the cycle
    group.balance = 0;
    group.deposits = Map::new(env);
    group.beneficiary = None;
    group.state = GroupState::Funding;
    group.last_trigger = env.ledger().timestamp();
    group.cycle = group
        .cycle
        .checked_add(1)
        .ok_or(ContractError::ArithmeticOverflow)?;

    group::save(env, &group)?;

    transfer(
        env,
        &config.token,
        &env.current_contract_address(),
        &caller,
        amount,
    )?;

    env.events().publish(
        (crate::symbol_short!("withdrawn"),),
        (group_id, caller, amount),
    );

    Ok(amount)
}

/// Move `amount` of `token`, surfacing any failure of the token contract as
/// `TransferFailed`.
pub(crate) fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let client = token::Client::new(env, token);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}
