use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::set_return_data;
use bytemuck::{Pod, Zeroable};

use crate::constants::EMPLOYEE_VESTING_SEED;
use crate::state::{EmployeeAccount, VestingAccount};

/// Fixed 24-byte return-data layout (little-endian u64s).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct ClaimQuote {
    pub vested: u64,
    pub withdrawn: u64,
    pub claimable: u64,
}

impl ClaimQuote {
    pub fn at(ledger: &EmployeeAccount, now: i64) -> Result<Self> {
        Ok(Self {
            vested: ledger.vested_amount(now)?,
            withdrawn: ledger.total_withdrawn,
            claimable: ledger.claimable_amount(now)?,
        })
    }
}

/// Read-only; anyone may ask what a ledger can claim right now.
pub fn quote_claimable_handler(ctx: Context<QuoteClaimable>, _company_name: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let quote = ClaimQuote::at(&ctx.accounts.employee_account, now)?;

    emit!(ClaimQuoted {
        vesting_account: ctx.accounts.vesting_account.key(),
        beneficiary: ctx.accounts.employee_account.beneficiary,
        vested: quote.vested,
        withdrawn: quote.withdrawn,
        claimable: quote.claimable,
        now,
    });
    set_return_data(bytemuck::bytes_of(&quote));

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct QuoteClaimable<'info> {
    #[account(seeds = [company_name.as_bytes()], bump = vesting_account.bump)]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(
        seeds = [
            EMPLOYEE_VESTING_SEED,
            employee_account.beneficiary.as_ref(),
            vesting_account.key().as_ref()
        ],
        bump = employee_account.bump,
    )]
    pub employee_account: Account<'info, EmployeeAccount>,
}

#[event]
pub struct ClaimQuoted {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub vested: u64,
    pub withdrawn: u64,
    pub claimable: u64,
    pub now: i64,
}
