use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Entrance fee is below the minimum allowed")]
    EntranceFeeTooLow,
    #[msg("Entrance fee exceeds the maximum allowed")]
    EntranceFeeTooHigh,
    #[msg("Draw interval is below the minimum allowed")]
    IntervalTooShort,
    #[msg("Draw interval exceeds the maximum allowed")]
    IntervalTooLong,
    #[msg("Payment is less than the entrance fee")]
    InsufficientPayment,
    #[msg("The pool has reached its maximum number of entrants")]
    PoolFull,
    #[msg("Raffle is not open")]
    RaffleNotOpen,
    #[msg("Draw conditions are not met")]
    UpkeepNotNeeded,
    #[msg("A randomness request is already in flight")]
    DrawInFlight,
    #[msg("Fulfillment does not match the pending randomness request")]
    UnknownRequest,
    #[msg("There are no entrants to select a winner from")]
    NoEntrants,
    #[msg("Winner account does not match the selected entrant")]
    WinnerAccountMismatch,
    #[msg("Prize transfer to the winner failed")]
    PayoutFailed,
    #[msg("Treasury transfer failed")]
    TransferFailed,
    InvalidTreasury,
    #[msg("Only the program management authority can perform this action")]
    NotProgramManagementAuthority,
    #[msg("Only the oracle authority may fulfill randomness requests")]
    NotOracleAuthority,
}
