#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod custody;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("coUnmi3oBUtwtd9fjeAvSsJssXh5A5xyPbhpewyzRVF");

#[program]
pub mod employee_vesting {
    use super::*;

    /// Registers a company: its vesting account and an empty treasury.
    pub fn create_vesting_account(
        ctx: Context<CreateVestingAccount>,
        company_name: String,
    ) -> Result<()> {
        instructions::create_vesting_account::create_vesting_account_handler(ctx, company_name)
    }

    pub fn fund_treasury(
        ctx: Context<FundTreasury>,
        company_name: String,
        amount: u64,
    ) -> Result<()> {
        instructions::fund_treasury::fund_treasury_handler(ctx, company_name, amount)
    }

    /// Owner-only enrollment of one beneficiary.
    pub fn create_employee_vesting(
        ctx: Context<CreateEmployeeVesting>,
        start_offset: i64,
        cliff_offset: i64,
        end_offset: i64,
        total_amount: u64,
    ) -> Result<()> {
        instructions::create_employee_vesting::create_employee_vesting_handler(
            ctx,
            start_offset,
            cliff_offset,
            end_offset,
            total_amount,
        )
    }

    /// Pays out everything vested and not yet withdrawn to the beneficiary.
    pub fn claim_tokens(ctx: Context<ClaimTokens>, company_name: String) -> Result<()> {
        instructions::claim_tokens::claim_tokens_handler(ctx, company_name)
    }

    pub fn quote_claimable(ctx: Context<QuoteClaimable>, company_name: String) -> Result<()> {
        instructions::quote_claimable::quote_claimable_handler(ctx, company_name)
    }
}
