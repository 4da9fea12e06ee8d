//! Treasury custody.
//!
//! The treasury token account is its own authority (a PDA), so no human key can
//! move escrowed tokens. Outbound transfers need a [`TreasuryAuthority`], which
//! can only be built after the treasury address has been re-derived from the
//! company name and the stored bump.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, TransferChecked};

use crate::constants::TREASURY_SEED;
use crate::error::VestingError;
use crate::pda;
use crate::state::VestingAccount;

pub struct TreasuryAuthority<'a> {
    company_name: &'a [u8],
    bump: [u8; 1],
}

impl<'a> TreasuryAuthority<'a> {
    pub fn for_vesting_account(vesting: &'a VestingAccount, treasury: &Pubkey) -> Result<Self> {
        require_keys_eq!(
            *treasury,
            vesting.treasury_token_account,
            VestingError::AccountMismatch
        );
        pda::verify(
            treasury,
            TREASURY_SEED,
            &[vesting.company_name.as_bytes()],
            vesting.treasury_bump,
            &crate::ID,
        )?;
        Ok(Self {
            company_name: vesting.company_name.as_bytes(),
            bump: [vesting.treasury_bump],
        })
    }

    pub fn seeds(&self) -> [&[u8]; 3] {
        [TREASURY_SEED, self.company_name, &self.bump]
    }

    /// `transfer_checked` out of the treasury, signed by the treasury PDA.
    pub fn transfer<'info>(
        &self,
        token_program: AccountInfo<'info>,
        treasury: AccountInfo<'info>,
        mint: AccountInfo<'info>,
        destination: AccountInfo<'info>,
        amount: u64,
        decimals: u8,
    ) -> Result<()> {
        let seeds = self.seeds();
        let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];
        token_interface::transfer_checked(
            CpiContext::new_with_signer(
                token_program,
                TransferChecked {
                    from: treasury.clone(),
                    mint,
                    to: destination,
                    authority: treasury,
                },
                signer_seeds,
            ),
            amount,
            decimals,
        )
    }
}
