use anchor_lang::prelude::*;

/// Custom error codes for the employee vesting program.
#[error_code]
pub enum VestingError {
    // Authorization.
    #[msg("Unauthorized: signer does not hold the required role")]
    Unauthorized,

    #[msg("Supplied account does not match its derived address")]
    AccountMismatch,

    // Schedule.
    #[msg("Invalid schedule: require start <= cliff <= end and a non-zero total")]
    InvalidSchedule,

    #[msg("Nothing vested to claim")]
    NothingVested,

    // State.
    #[msg("A vesting account already exists for this company")]
    AlreadyExists,

    #[msg("Beneficiary is already enrolled in this vesting account")]
    AlreadyEnrolled,

    // Integrity.
    #[msg("Treasury balance is below the claimable amount")]
    InsufficientCustodyBalance,

    #[msg("No bump yields a valid program address for these seeds")]
    DerivationExhausted,

    #[msg("Math overflow")]
    MathOverflow,

    // Input.
    #[msg("Invalid token mint")]
    InvalidMint,

    #[msg("Company name must be 1 to 32 bytes")]
    InvalidCompanyName,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,
}
