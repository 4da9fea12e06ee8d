use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::custody::TreasuryAuthority;
use crate::state::{EmployeeAccount, VestingAccount};

pub fn claim_tokens_handler(ctx: Context<ClaimTokens>, company_name: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let beneficiary = ctx.accounts.beneficiary.key();
    let vesting_key = ctx.accounts.vesting_account.key();
    let ledger_key = ctx.accounts.employee_account.key();

    let va = &ctx.accounts.vesting_account;
    let ledger = &mut ctx.accounts.employee_account;

    ledger.authorize_claim(&beneficiary, &ledger_key, &vesting_key)?;
    va.verify_claim_accounts(
        &vesting_key,
        &company_name,
        &ctx.accounts.mint.key(),
        &ctx.accounts.treasury_token_account.mint,
    )?;
    let authority =
        TreasuryAuthority::for_vesting_account(va, &ctx.accounts.treasury_token_account.key())?;

    // Debit before the CPI; a failed transfer aborts the whole instruction.
    let amount = ledger.release(now, ctx.accounts.treasury_token_account.amount)?;
    let total_withdrawn = ledger.total_withdrawn;

    authority.transfer(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.treasury_token_account.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.employee_token_account.to_account_info(),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    msg!("claimed {amount} ({total_withdrawn} withdrawn in total)");
    emit!(TokensClaimed {
        vesting_account: vesting_key,
        beneficiary,
        amount,
        total_withdrawn,
        claimed_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    #[account(mut)]
    pub employee_account: Account<'info, EmployeeAccount>,

    pub vesting_account: Account<'info, VestingAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::mint = mint,
        associated_token::authority = beneficiary,
        associated_token::token_program = token_program,
    )]
    pub employee_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensClaimed {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_withdrawn: u64,
    pub claimed_at: i64,
}
