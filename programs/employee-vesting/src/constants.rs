//! Program-wide constants.

/// Namespace tag of the treasury token account PDA.
pub const TREASURY_SEED: &[u8] = b"vesting_treasury";

/// Namespace tag of the per-beneficiary ledger PDA.
pub const EMPLOYEE_VESTING_SEED: &[u8] = b"employee_vesting";

/// The company name is used verbatim as a PDA seed, so it is bounded by the
/// runtime's per-seed limit.
pub const MAX_COMPANY_NAME_LEN: usize = 32;

/// Anchor account discriminator length.
pub const DISCRIMINATOR_LEN: usize = 8;
