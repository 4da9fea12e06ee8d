use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{DISCRIMINATOR_LEN, TREASURY_SEED};
use crate::error::VestingError;
use crate::pda::company_seed;
use crate::state::VestingAccount;

pub fn create_vesting_account_handler(
    ctx: Context<CreateVestingAccount>,
    company_name: String,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.signer.key();
    let mint = ctx.accounts.mint.key();
    let treasury = ctx.accounts.treasury_token_account.key();

    let va = &mut ctx.accounts.vesting_account;
    va.register(
        owner,
        mint,
        treasury,
        company_name,
        ctx.bumps.treasury_token_account,
        ctx.bumps.vesting_account,
        now,
    )?;

    msg!("vesting account created for {}", va.company_name);
    emit!(VestingAccountCreated {
        vesting_account: va.key(),
        owner,
        mint,
        treasury,
        company_name: va.company_name.clone(),
        created_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct CreateVestingAccount<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    // Name and uniqueness must fail before `treasury_token_account` is touched.
    #[account(
        init_if_needed,
        payer = signer,
        space = DISCRIMINATOR_LEN + VestingAccount::INIT_SPACE,
        seeds = [company_seed(&company_name)],
        bump,
        constraint = VestingAccount::validate_company_name(&company_name).is_ok()
            @ VestingError::InvalidCompanyName,
        constraint = !vesting_account.is_initialized() @ VestingError::AlreadyExists,
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(
        constraint = *mint.to_account_info().owner == token_program.key()
            @ VestingError::InvalidMint,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init_if_needed,
        payer = signer,
        token::mint = mint,
        token::authority = treasury_token_account,
        token::token_program = token_program,
        seeds = [TREASURY_SEED, company_seed(&company_name)],
        bump
    )]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}

#[event]
pub struct VestingAccountCreated {
    pub vesting_account: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub treasury: Pubkey,
    pub company_name: String,
    pub created_at: i64,
}
