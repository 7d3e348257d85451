use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    InvalidName = 1,
    GroupNotFound = 2,
    GroupFull = 3,
    AlreadyMember = 4,
    CallerNotMember = 5,
    InsufficientAmount = 6,
    AlreadyPaidThisCycle = 7,
    UpkeepNotNeeded = 8,
    UnknownRequest = 9,
    NotAwaitingRandomness = 10,
    NotSelectedBeneficiary = 11,
    NothingToWithdraw = 12,
    StateMismatch = 13,
    TransferFailed = 14,
    RequestIdInUse = 15,
    NotGroupCreator = 16,
    InvariantViolation = 17,
    ArithmeticOverflow = 18,
    InvalidConfig = 19,
}
