//! Program-derived addresses for every account the program owns.
//!
//! Seeds (program id = `crate::ID`):
//! - vesting account: `[company_name]`
//! - treasury token account: `[b"vesting_treasury", company_name]`
//! - employee ledger: `[b"employee_vesting", beneficiary, vesting_account]`
//!
//! Everything here is a pure function of its inputs, so clients and auditors
//! can recompute the same addresses off-chain.

use anchor_lang::prelude::*;

use crate::constants::{EMPLOYEE_VESTING_SEED, MAX_COMPANY_NAME_LEN, TREASURY_SEED};
use crate::error::VestingError;

/// Vesting accounts are keyed by the bare company name.
pub const VESTING_ACCOUNT_TAG: &[u8] = b"";

fn tagged<'a>(tag: &'a [u8], seeds: &[&'a [u8]]) -> Vec<&'a [u8]> {
    let mut all = Vec::with_capacity(seeds.len() + 2);
    if !tag.is_empty() {
        all.push(tag);
    }
    all.extend_from_slice(seeds);
    all
}

/// Finds the canonical (highest valid) bump for `tag ++ seeds`.
pub fn derive(tag: &[u8], seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&tagged(tag, seeds), program_id)
        .ok_or_else(|| error!(VestingError::DerivationExhausted))
}

/// Recomputes the address from a stored bump and requires it to equal `expected`.
pub fn verify(
    expected: &Pubkey,
    tag: &[u8],
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Pubkey,
) -> Result<()> {
    let bump = [bump];
    let mut all = tagged(tag, seeds);
    all.push(&bump[..]);
    let derived = Pubkey::create_program_address(&all, program_id)
        .map_err(|_| error!(VestingError::AccountMismatch))?;
    require_keys_eq!(derived, *expected, VestingError::AccountMismatch);
    Ok(())
}

/// Company name as a seed, capped at the per-seed limit so account validation
/// can reach the name check instead of failing inside the bump search.
/// Identity for every name that passes `validate_company_name`.
pub fn company_seed(company_name: &str) -> &[u8] {
    let bytes = company_name.as_bytes();
    &bytes[..bytes.len().min(MAX_COMPANY_NAME_LEN)]
}

pub fn vesting_account_address(company_name: &str) -> Result<(Pubkey, u8)> {
    derive(VESTING_ACCOUNT_TAG, &[company_name.as_bytes()], &crate::ID)
}

pub fn treasury_address(company_name: &str) -> Result<(Pubkey, u8)> {
    derive(TREASURY_SEED, &[company_name.as_bytes()], &crate::ID)
}

pub fn employee_account_address(
    beneficiary: &Pubkey,
    vesting_account: &Pubkey,
) -> Result<(Pubkey, u8)> {
    derive(
        EMPLOYEE_VESTING_SEED,
        &[beneficiary.as_ref(), vesting_account.as_ref()],
        &crate::ID,
    )
}
