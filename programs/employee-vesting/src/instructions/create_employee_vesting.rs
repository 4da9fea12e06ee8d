use anchor_lang::prelude::*;

use crate::constants::{DISCRIMINATOR_LEN, EMPLOYEE_VESTING_SEED};
use crate::state::{EmployeeAccount, VestingAccount};

/// Enrolls `beneficiary`. Offsets are seconds relative to the current clock.
pub fn create_employee_vesting_handler(
    ctx: Context<CreateEmployeeVesting>,
    start_offset: i64,
    cliff_offset: i64,
    end_offset: i64,
    total_amount: u64,
) -> Result<()> {
    let va = &ctx.accounts.vesting_account;
    va.authorize_owner(&ctx.accounts.owner.key())?;
    va.verify_address(&va.key())?;

    let now = Clock::get()?.unix_timestamp;
    let vesting_key = va.key();
    let beneficiary = ctx.accounts.beneficiary.key();
    let bump = ctx.bumps.employee_account;

    let ledger = &mut ctx.accounts.employee_account;
    ledger.enroll(
        beneficiary,
        vesting_key,
        now,
        start_offset,
        cliff_offset,
        end_offset,
        total_amount,
        bump,
    )?;

    emit!(EmployeeEnrolled {
        vesting_account: vesting_key,
        beneficiary,
        start_time: ledger.start_time,
        cliff_time: ledger.cliff_time,
        end_time: ledger.end_time,
        total_amount: ledger.total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateEmployeeVesting<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub beneficiary: SystemAccount<'info>,

    pub vesting_account: Account<'info, VestingAccount>,

    #[account(
        init_if_needed,
        payer = owner,
        space = DISCRIMINATOR_LEN + EmployeeAccount::INIT_SPACE,
        seeds = [
            EMPLOYEE_VESTING_SEED,
            beneficiary.key().as_ref(),
            vesting_account.key().as_ref()
        ],
        bump
    )]
    pub employee_account: Account<'info, EmployeeAccount>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct EmployeeEnrolled {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub total_amount: u64,
}
