use anchor_lang::prelude::*;

use crate::constants::MAX_COMPANY_NAME_LEN;
use crate::error::VestingError;
use crate::pda::{self, VESTING_ACCOUNT_TAG};

/// One per company. Seeds: `[company_name]`.
#[account]
#[derive(InitSpace)]
pub struct VestingAccount {
    /// Employer authority; the only key allowed to enroll employees and fund.
    pub owner: Pubkey,
    /// Mint under vesting.
    pub mint: Pubkey,
    /// Treasury token account PDA (`[b"vesting_treasury", company_name]`).
    pub treasury_token_account: Pubkey,
    #[max_len(32)]
    pub company_name: String,
    pub treasury_bump: u8,
    pub bump: u8,
    /// Unix seconds at creation.
    pub created_at: i64,
}

impl VestingAccount {
    /// `init_if_needed` hands back a zeroed record for a fresh account.
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn validate_company_name(company_name: &str) -> Result<()> {
        require!(
            !company_name.is_empty() && company_name.len() <= MAX_COMPANY_NAME_LEN,
            VestingError::InvalidCompanyName
        );
        Ok(())
    }

    /// Writes the registry record into a zeroed account.
    #[allow(clippy::too_many_arguments)]
    pub fn register(
        &mut self,
        owner: Pubkey,
        mint: Pubkey,
        treasury_token_account: Pubkey,
        company_name: String,
        treasury_bump: u8,
        bump: u8,
        now: i64,
    ) -> Result<()> {
        require!(!self.is_initialized(), VestingError::AlreadyExists);
        Self::validate_company_name(&company_name)?;
        *self = Self {
            owner,
            mint,
            treasury_token_account,
            company_name,
            treasury_bump,
            bump,
            created_at: now,
        };
        Ok(())
    }

    pub fn authorize_owner(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.owner, VestingError::Unauthorized);
        Ok(())
    }

    /// Deposit preconditions: owner-signed, non-zero, same mint, and a source
    /// token account held by the owner.
    pub fn authorize_funding(
        &self,
        signer: &Pubkey,
        amount: u64,
        mint: &Pubkey,
        source_mint: &Pubkey,
        source_owner: &Pubkey,
    ) -> Result<()> {
        require!(amount > 0, VestingError::InvalidAmount);
        self.authorize_owner(signer)?;
        require_keys_eq!(*mint, self.mint, VestingError::InvalidMint);
        require_keys_eq!(*source_mint, self.mint, VestingError::InvalidMint);
        require_keys_eq!(*source_owner, *signer, VestingError::AccountMismatch);
        Ok(())
    }

    /// Registry side of a claim: `key` is this record's PDA for `company_name`
    /// and both the mint and the treasury's mint are the registered mint.
    pub fn verify_claim_accounts(
        &self,
        key: &Pubkey,
        company_name: &str,
        mint: &Pubkey,
        treasury_mint: &Pubkey,
    ) -> Result<()> {
        require!(
            self.company_name == company_name,
            VestingError::AccountMismatch
        );
        self.verify_address(key)?;
        require_keys_eq!(*mint, self.mint, VestingError::AccountMismatch);
        require_keys_eq!(*treasury_mint, self.mint, VestingError::AccountMismatch);
        Ok(())
    }

    /// Requires `key` to be this record's own PDA.
    pub fn verify_address(&self, key: &Pubkey) -> Result<()> {
        pda::verify(
            key,
            VESTING_ACCOUNT_TAG,
            &[self.company_name.as_bytes()],
            self.bump,
            &crate::ID,
        )
    }
}
