use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::constants::TREASURY_SEED;
use crate::error::VestingError;
use crate::state::VestingAccount;

/// Employer deposit into the treasury. Only ever increases the custody balance.
pub fn fund_treasury_handler(
    ctx: Context<FundTreasury>,
    _company_name: String,
    amount: u64,
) -> Result<()> {
    ctx.accounts.vesting_account.authorize_funding(
        &ctx.accounts.owner.key(),
        amount,
        &ctx.accounts.mint.key(),
        &ctx.accounts.owner_token_account.mint,
        &ctx.accounts.owner_token_account.owner,
    )?;

    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.owner_token_account.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.treasury_token_account.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    ctx.accounts.treasury_token_account.reload()?;
    let balance = ctx.accounts.treasury_token_account.amount;

    emit!(TreasuryFunded {
        vesting_account: ctx.accounts.vesting_account.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        treasury_balance: balance,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct FundTreasury<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [company_name.as_bytes()],
        bump = vesting_account.bump,
        has_one = treasury_token_account @ VestingError::AccountMismatch,
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, company_name.as_bytes()],
        bump = vesting_account.treasury_bump,
    )]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

#[event]
pub struct TreasuryFunded {
    pub vesting_account: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub treasury_balance: u64,
}
