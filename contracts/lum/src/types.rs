use soroban_sdk::{contracttype, Address, BytesN, Map, String, Vec};

/// Fixed number of members in every group.
pub const GROUP_CAPACITY: u32 = 4;

/// Longest accepted group name, in bytes.
pub const MAX_NAME_LEN: u32 = 64;

/// Where a group is in its collect-then-payout cycle.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupState {
    Filling,             // Accepting members
    Funding,             // Collecting this cycle's deposits
    AwaitingUpkeep,      // Fully funded, waiting for the interval to elapse
    AwaitingRandomness,  // Randomness requested, waiting for delivery
    BeneficiarySelected, // Payout open to the selected member
    Closed,              // Closed by its creator, rejects everything
}

/// Deployment-time configuration shared by every group.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct LumConfig {
    pub token: Address,
    pub deposit_amount: i128,
    pub interval: u64,
    pub open_funding: bool,
    pub coordinator: Address,
    pub key_hash: BytesN<32>,
    pub subscription_id: u64,
    pub min_confirmations: u32,
    pub callback_gas_limit: u32,
}

/// A member's contribution for the current cycle.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct MemberDeposit {
    pub has_paid: bool,
    pub amount: i128,
}

/// A savings group and the state of its current cycle.
#[contracttype]
#[derive(Clone, Debug)]
pub struct LumGroup {
    pub id: BytesN<32>,
    pub name: String,
    pub creator: Address,
    pub members: Vec<Address>,
    pub deposits: Map<Address, MemberDeposit>,
    pub balance: i128,
    pub state: GroupState,
    pub cycle: u32,
    pub last_trigger: u64,
    pub pending_request: Option<u64>,
    pub beneficiary: Option<Address>,
    pub created_at: u64,
}

/// Answer to a keeper's eligibility poll. `payload` is handed back to
/// `perform_upkeep` unchanged.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct UpkeepCheck {
    pub due: bool,
    pub payload: BytesN<32>,
}

/// Storage keys for all contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    GroupCounter,
    GroupIndex(u32),
    Group(BytesN<32>),
    Request(u64),
    MemberGroups(Address),
}
