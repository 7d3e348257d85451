//! Record-level invariants for a group.
//!
//! Every mutation goes through `check_group` before the record is written
//! back, so a transition that would leave a group inconsistent fails the
//! whole invocation instead of persisting.

use soroban_sdk::Address;

use crate::errors::ContractError;
use crate::types::{GroupState, LumGroup, GROUP_CAPACITY};

pub fn check_group(group: &LumGroup) -> Result<(), ContractError> {
    let size = group.members.len();
    if size == 0 || size > GROUP_CAPACITY {
        return Err(ContractError::InvariantViolation);
    }

    // Members are unique.
    for (i, member) in group.members.iter().enumerate() {
        for other in group.members.iter().skip(i + 1) {
            if member == other {
                return Err(ContractError::InvariantViolation);
            }
        }
    }

    // Balance is exactly the sum of this cycle's paid deposits.
    let mut total: i128 = 0;
    for (member, deposit) in group.deposits.iter() {
        if !is_member(group, &member) || !deposit.has_paid || deposit.amount <= 0 {
            return Err(ContractError::InvariantViolation);
        }
        total = total
            .checked_add(deposit.amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
    }
    if total != group.balance {
        return Err(ContractError::InvariantViolation);
    }

    // A request is outstanding exactly while waiting for randomness.
    if group.pending_request.is_some() != (group.state == GroupState::AwaitingRandomness) {
        return Err(ContractError::InvariantViolation);
    }

    // A beneficiary exists exactly while the payout is open, and is a member.
    match &group.beneficiary {
        Some(beneficiary) => {
            if group.state != GroupState::BeneficiarySelected || !is_member(group, beneficiary) {
                return Err(ContractError::InvariantViolation);
            }
        }
        None => {
            if group.state == GroupState::BeneficiarySelected {
                return Err(ContractError::InvariantViolation);
            }
        }
    }

    match group.state {
        GroupState::Filling => {
            if size >= GROUP_CAPACITY || group.balance != 0 {
                return Err(ContractError::InvariantViolation);
            }
        }
        GroupState::AwaitingUpkeep
        | GroupState::AwaitingRandomness
        | GroupState::BeneficiarySelected => {
            if size != GROUP_CAPACITY || group.deposits.len() != size {
                return Err(ContractError::InvariantViolation);
            }
        }
        GroupState::Closed => {
            if group.balance != 0 {
                return Err(ContractError::InvariantViolation);
            }
        }
        GroupState::Funding => {}
    }

    Ok(())
}

pub fn is_member(group: &LumGroup, address: &Address) -> bool {
    for m in group.members.iter() {
        if m == *address {
            return true;
        }
    }
    false
}
