use soroban_sdk::{Address, BytesN, Env};

use crate::errors::ContractError;
use crate::group;
use crate::invariants::is_member;
use crate::payout::transfer;
use crate::storage;
use crate::types::{GroupState, MemberDeposit, GROUP_CAPACITY};

/// Pay this cycle's deposit. `amount` is what the member offers; exactly the
/// configured deposit is pulled from their account.
pub fn deposit_funds(
    env: &Env,
    member: Address,
    group_id: BytesN<32>,
    amount: i128,
) -> Result<(), ContractError> {
    member.require_auth();

    let config = storage::get_config(env);
    let mut group = group::load(env, &group_id)?;

    if !is_member(&group, &member) {
        return Err(ContractError::CallerNotMember);
    }

    if amount < config.deposit_amount {
        return Err(ContractError::InsufficientAmount);
    }

    let already_paid = group
        .deposits
        .get(member.clone())
        .map(|deposit| deposit.has_paid)
        .unwrap_or(false);
    if already_paid {
        return Err(ContractError::AlreadyPaidThisCycle);
    }

    match group.state {
        GroupState::Funding => {}
        GroupState::Filling if config.open_funding => group.state = GroupState::Funding,
        _ => return Err(ContractError::StateMismatch),
    }

    // Record the deposit
    group.deposits.set(
        member.clone(),
        MemberDeposit {
            has_paid: true,
            amount: config.deposit_amount,
        },
    );
    group.balance = group
        .balance
        .checked_add(config.deposit_amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    // Check if the full group has paid
    let ready =
        group.members.len() == GROUP_CAPACITY && group.deposits.len() == group.members.len();
    if ready {
        group.state = GroupState::AwaitingUpkeep;
        group.last_trigger = env.ledger().timestamp();
    }

    group::save(env, &group)?;

    // Pull the deposit from the member into the pool
    transfer(
        env,
        &config.token,
        &member,
        &env.current_contract_address(),
        config.deposit_amount,
    )?;

    env.events().publish(
        (crate::symbol_short!("grp_fund"),),
        (group_id.clone(), member, config.deposit_amount),
    );

    if ready {
        env.events().publish(
            (crate::symbol_short!("grp_ready"),),
            (group_id, group.cycle, group.balance),
        );
    }

    Ok(())
}
