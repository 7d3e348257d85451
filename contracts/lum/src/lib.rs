#![no_std]

use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, Address, BytesN, Env, String, Vec,
    U256,
};

mod contribution;
mod errors;
mod group;
mod invariants;
mod payout;
mod randomness;
mod selection;
mod storage;
mod types;
mod upkeep;

pub use errors::ContractError;
pub use randomness::{RandomnessCoordinator, RandomnessCoordinatorClient};
pub use types::*;

#[contract]
pub struct LumContract;

#[contractimpl]
impl LumContract {
    /// Store the deployment configuration shared by every group.
    pub fn __constructor(env: Env, config: LumConfig) {
        if config.deposit_amount <= 0 {
            panic_with_error!(&env, ContractError::InvalidConfig);
        }
        storage::set_config(&env, &config);
    }

    pub fn config(env: Env) -> LumConfig {
        storage::get_config(&env)
    }

    /// Number of members every group is filled to.
    pub fn group_capacity(_env: Env) -> u32 {
        GROUP_CAPACITY
    }

    // ─── Registry ───────────────────────────────────────────────────

    /// Create a new group. The creator becomes member 0.
    pub fn create_group(
        env: Env,
        creator: Address,
        name: String,
    ) -> Result<BytesN<32>, ContractError> {
        group::create_group(&env, creator, name)
    }

    /// Join a group that still has a free slot.
    pub fn join_group(
        env: Env,
        member: Address,
        group_id: BytesN<32>,
    ) -> Result<(), ContractError> {
        group::join_group(&env, member, group_id)
    }

    /// Close a group whose current cycle holds no funds. Creator only.
    pub fn close_group(
        env: Env,
        creator: Address,
        group_id: BytesN<32>,
    ) -> Result<(), ContractError> {
        group::close_group(&env, creator, group_id)
    }

    /// Id a group named `name` gets when created at registry position `nonce`.
    pub fn compute_group_id(env: Env, name: String, nonce: u32) -> BytesN<32> {
        group::compute_group_id(&env, &name, nonce)
    }

    pub fn number_of_groups(env: Env) -> u32 {
        group::number_of_groups(&env)
    }

    pub fn group_id_at(env: Env, index: u32) -> Result<BytesN<32>, ContractError> {
        group::group_id_at(&env, index)
    }

    pub fn group_details(env: Env, group_id: BytesN<32>) -> Result<LumGroup, ContractError> {
        group::get_group(&env, group_id)
    }

    pub fn number_of_members(env: Env, group_id: BytesN<32>) -> Result<u32, ContractError> {
        group::number_of_members(&env, group_id)
    }

    pub fn balance_of(env: Env, group_id: BytesN<32>) -> Result<i128, ContractError> {
        group::balance_of(&env, group_id)
    }

    /// Whether `member` has paid in the group's current cycle.
    pub fn payment_status(
        env: Env,
        member: Address,
        group_id: BytesN<32>,
    ) -> Result<bool, ContractError> {
        group::payment_status(&env, member, group_id)
    }

    /// All group ids an address is a member of.
    pub fn member_groups(env: Env, member: Address) -> Vec<BytesN<32>> {
        group::get_member_groups(&env, member)
    }

    // ─── Deposits ───────────────────────────────────────────────────

    /// Pay the current cycle's deposit.
    pub fn deposit_funds(
        env: Env,
        member: Address,
        group_id: BytesN<32>,
        amount: i128,
    ) -> Result<(), ContractError> {
        contribution::deposit_funds(&env, member, group_id, amount)
    }

    // ─── Upkeep ─────────────────────────────────────────────────────

    /// Read-only eligibility poll for keepers.
    pub fn check_upkeep(env: Env, group_id: BytesN<32>) -> Result<UpkeepCheck, ContractError> {
        upkeep::check_upkeep(&env, group_id)
    }

    /// Ids of groups due for upkeep among registry positions
    /// `start..start + limit`.
    pub fn pending_upkeeps(env: Env, start: u32, limit: u32) -> Vec<BytesN<32>> {
        upkeep::pending_upkeeps(&env, start, limit)
    }

    /// Re-check eligibility and request randomness for the group in `payload`.
    /// Returns the request id handed out by the coordinator.
    pub fn perform_upkeep(env: Env, payload: BytesN<32>) -> Result<u64, ContractError> {
        upkeep::perform_upkeep(&env, payload)
    }

    // ─── Randomness ─────────────────────────────────────────────────

    /// Coordinator callback carrying the random value for `request_id`.
    pub fn deliver_randomness(
        env: Env,
        request_id: u64,
        value: U256,
    ) -> Result<(), ContractError> {
        randomness::deliver_randomness(&env, request_id, value)
    }

    // ─── Payouts ────────────────────────────────────────────────────

    /// Withdraw the pooled balance. Only the selected beneficiary can call this.
    pub fn withdraw(
        env: Env,
        caller: Address,
        group_id: BytesN<32>,
    ) -> Result<i128, ContractError> {
        payout::withdraw(&env, caller, group_id)
    }
}
