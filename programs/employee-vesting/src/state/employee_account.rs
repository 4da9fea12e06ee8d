use anchor_lang::prelude::*;

use crate::constants::EMPLOYEE_VESTING_SEED;
use crate::error::VestingError;
use crate::pda;
use crate::utils::schedule;

/// One per (beneficiary, vesting account).
/// Seeds: `[b"employee_vesting", beneficiary, vesting_account]`.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct EmployeeAccount {
    pub beneficiary: Pubkey,
    /// Back-reference to the company's vesting account, used for validation only.
    pub vesting_account: Pubkey,
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub total_amount: u64,
    /// Monotonically increasing; never exceeds `total_amount`.
    pub total_withdrawn: u64,
    pub bump: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimStatus {
    Created,
    PartiallyClaimed,
    FullyClaimed,
}

impl EmployeeAccount {
    /// `init_if_needed` hands back a zeroed record for a fresh account.
    pub fn is_initialized(&self) -> bool {
        self.beneficiary != Pubkey::default()
    }

    /// Builds a fresh ledger, resolving offsets against `now`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        beneficiary: Pubkey,
        vesting_account: Pubkey,
        now: i64,
        start_offset: i64,
        cliff_offset: i64,
        end_offset: i64,
        total_amount: u64,
        bump: u8,
    ) -> Result<Self> {
        require!(
            start_offset <= cliff_offset && cliff_offset <= end_offset && total_amount > 0,
            VestingError::InvalidSchedule
        );
        let at = |offset: i64| now.checked_add(offset).ok_or(VestingError::MathOverflow);
        Ok(Self {
            beneficiary,
            vesting_account,
            start_time: at(start_offset)?,
            cliff_time: at(cliff_offset)?,
            end_time: at(end_offset)?,
            total_amount,
            total_withdrawn: 0,
            bump,
        })
    }

    /// Writes a fresh schedule into a zeroed record. An enrolled record is
    /// left untouched.
    #[allow(clippy::too_many_arguments)]
    pub fn enroll(
        &mut self,
        beneficiary: Pubkey,
        vesting_account: Pubkey,
        now: i64,
        start_offset: i64,
        cliff_offset: i64,
        end_offset: i64,
        total_amount: u64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), VestingError::AlreadyEnrolled);
        *self = Self::new(
            beneficiary,
            vesting_account,
            now,
            start_offset,
            cliff_offset,
            end_offset,
            total_amount,
            bump,
        )?;
        Ok(())
    }

    pub fn vested_amount(&self, now: i64) -> Result<u64> {
        Ok(schedule::vested_amount(
            self.total_amount,
            self.start_time,
            self.cliff_time,
            self.end_time,
            now,
        )?)
    }

    pub fn claimable_amount(&self, now: i64) -> Result<u64> {
        Ok(schedule::claimable_amount(
            self.vested_amount(now)?,
            self.total_withdrawn,
        )?)
    }

    pub fn status(&self) -> ClaimStatus {
        if self.total_withdrawn == 0 {
            ClaimStatus::Created
        } else if self.total_withdrawn < self.total_amount {
            ClaimStatus::PartiallyClaimed
        } else {
            ClaimStatus::FullyClaimed
        }
    }

    /// Caller must be the beneficiary; `key` must be this ledger's PDA under
    /// `vesting_account`.
    pub fn authorize_claim(
        &self,
        caller: &Pubkey,
        key: &Pubkey,
        vesting_account: &Pubkey,
    ) -> Result<()> {
        require_keys_eq!(*caller, self.beneficiary, VestingError::Unauthorized);
        require_keys_eq!(
            self.vesting_account,
            *vesting_account,
            VestingError::AccountMismatch
        );
        pda::verify(
            key,
            EMPLOYEE_VESTING_SEED,
            &[self.beneficiary.as_ref(), self.vesting_account.as_ref()],
            self.bump,
            &crate::ID,
        )
    }

    /// Debits everything claimable at `now` and returns the amount to transfer.
    /// `custody_balance` is the treasury's current balance.
    pub fn release(&mut self, now: i64, custody_balance: u64) -> Result<u64> {
        let claimable = self.claimable_amount(now)?;
        require!(claimable > 0, VestingError::NothingVested);
        require!(
            custody_balance >= claimable,
            VestingError::InsufficientCustodyBalance
        );
        let withdrawn = self
            .total_withdrawn
            .checked_add(claimable)
            .ok_or(VestingError::MathOverflow)?;
        require!(withdrawn <= self.total_amount, VestingError::MathOverflow);
        self.total_withdrawn = withdrawn;
        Ok(claimable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn assert_vesting_err<T: std::fmt::Debug>(res: Result<T>, expected: VestingError) {
        match res {
            Err(Error::AnchorError(e)) => {
                assert_eq!(e.error_code_number, u32::from(expected))
            }
            other => panic!("expected {expected:?}, got {other:?}"),
        }
    }

    fn enrolled(
        start: i64,
        cliff: i64,
        end: i64,
        total: u64,
    ) -> (Pubkey, Pubkey, EmployeeAccount) {
        let beneficiary = Pubkey::new_unique();
        let (vesting, _) = pda::vesting_account_address("company").unwrap();
        let (key, bump) = pda::employee_account_address(&beneficiary, &vesting).unwrap();
        let ledger = EmployeeAccount::new(beneficiary, vesting, 0, start, cliff, end, total, bump)
            .unwrap();
        (key, vesting, ledger)
    }

    #[test]
    fn new_resolves_offsets_from_clock() {
        let ledger = EmployeeAccount::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            1_000,
            0,
            100,
            400,
            5,
            254,
        )
        .unwrap();
        assert_eq!(ledger.start_time, 1_000);
        assert_eq!(ledger.cliff_time, 1_100);
        assert_eq!(ledger.end_time, 1_400);
        assert_eq!(ledger.total_withdrawn, 0);
        assert_eq!(ledger.status(), ClaimStatus::Created);
    }

    #[test]
    fn new_rejects_bad_schedules() {
        let b = Pubkey::new_unique();
        let v = Pubkey::new_unique();
        for (start, cliff, end, total) in [(10, 5, 20, 1), (0, 30, 20, 1), (0, 0, 20, 0)] {
            assert_vesting_err(
                EmployeeAccount::new(b, v, 0, start, cliff, end, total, 255),
                VestingError::InvalidSchedule,
            );
        }
        assert_vesting_err(
            EmployeeAccount::new(b, v, i64::MAX, 0, 0, 1, 1, 255),
            VestingError::MathOverflow,
        );
    }

    #[test]
    fn two_claims_drain_the_allocation() {
        let (_, _, mut ledger) = enrolled(0, 0, 100, 100);
        assert_eq!(ledger.vested_amount(0).unwrap(), 0);
        assert_eq!(ledger.vested_amount(50).unwrap(), 50);
        assert_eq!(ledger.vested_amount(100).unwrap(), 100);

        assert_eq!(ledger.release(50, 1_000).unwrap(), 50);
        assert_eq!(ledger.status(), ClaimStatus::PartiallyClaimed);
        assert_eq!(ledger.release(100, 1_000).unwrap(), 50);
        assert_eq!(ledger.total_withdrawn, 100);
        assert_eq!(ledger.status(), ClaimStatus::FullyClaimed);

        assert_vesting_err(ledger.release(10_000, 1_000), VestingError::NothingVested);
        assert_eq!(ledger.total_withdrawn, 100);
    }

    #[test]
    fn claim_before_cliff_is_rejected() {
        let (_, _, mut ledger) = enrolled(0, 100, 200, 1_000);
        assert_vesting_err(ledger.release(99, u64::MAX), VestingError::NothingVested);
        assert_eq!(ledger.total_withdrawn, 0);
    }

    #[test]
    fn repeated_claim_at_same_instant_pays_once() {
        let (_, _, mut ledger) = enrolled(0, 0, 100, 100);
        assert_eq!(ledger.release(30, 100).unwrap(), 30);
        assert_vesting_err(ledger.release(30, 100), VestingError::NothingVested);
        assert_eq!(ledger.total_withdrawn, 30);
    }

    #[test]
    fn underfunded_treasury_is_fatal_and_leaves_ledger_untouched() {
        let (_, _, mut ledger) = enrolled(0, 0, 100, 100);
        assert_vesting_err(
            ledger.release(60, 59),
            VestingError::InsufficientCustodyBalance,
        );
        assert_eq!(ledger.total_withdrawn, 0);
        assert_eq!(ledger.release(60, 60).unwrap(), 60);
    }

    #[test]
    fn sum_of_claims_never_exceeds_total() {
        let (_, _, mut ledger) = enrolled(-17, 3, 997, 12_345);
        let mut paid = 0u64;
        for now in (-50..1_100).step_by(7) {
            if let Ok(amount) = ledger.release(now, u64::MAX) {
                paid += amount;
            }
            assert!(ledger.total_withdrawn <= ledger.total_amount);
        }
        assert_eq!(paid, 12_345);
        assert_eq!(ledger.total_withdrawn, 12_345);
    }

    #[test]
    fn authorize_accepts_beneficiary() {
        let (key, vesting, ledger) = enrolled(0, 0, 100, 100);
        ledger
            .authorize_claim(&ledger.beneficiary, &key, &vesting)
            .unwrap();
    }

    #[test]
    fn authorize_rejects_other_signer() {
        let (key, vesting, ledger) = enrolled(0, 0, 100, 100);
        let before = ledger.clone();
        assert_vesting_err(
            ledger.authorize_claim(&Pubkey::new_unique(), &key, &vesting),
            VestingError::Unauthorized,
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn authorize_rejects_substituted_accounts() {
        let (key, vesting, ledger) = enrolled(0, 0, 100, 100);
        let (other_vesting, _) = pda::vesting_account_address("globex").unwrap();
        assert_vesting_err(
            ledger.authorize_claim(&ledger.beneficiary, &key, &other_vesting),
            VestingError::AccountMismatch,
        );
        assert_vesting_err(
            ledger.authorize_claim(&ledger.beneficiary, &Pubkey::new_unique(), &vesting),
            VestingError::AccountMismatch,
        );
    }

    fn zeroed() -> EmployeeAccount {
        EmployeeAccount {
            beneficiary: Pubkey::default(),
            vesting_account: Pubkey::default(),
            start_time: 0,
            cliff_time: 0,
            end_time: 0,
            total_amount: 0,
            total_withdrawn: 0,
            bump: 0,
        }
    }

    #[test]
    fn enrollment_happens_exactly_once() {
        let beneficiary = Pubkey::new_unique();
        let vesting = Pubkey::new_unique();
        let mut ledger = zeroed();
        assert!(!ledger.is_initialized());

        ledger
            .enroll(beneficiary, vesting, 1_000, 0, 10, 100, 500, 253)
            .unwrap();
        assert!(ledger.is_initialized());
        let first = ledger.clone();

        assert_vesting_err(
            ledger.enroll(beneficiary, vesting, 2_000, 0, 0, 1, 9, 253),
            VestingError::AlreadyEnrolled,
        );
        assert_eq!(ledger, first);
    }

    #[test]
    fn failed_enrollment_leaves_record_zeroed() {
        let mut ledger = zeroed();
        assert_vesting_err(
            ledger.enroll(
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                0,
                5,
                0,
                10,
                1,
                255,
            ),
            VestingError::InvalidSchedule,
        );
        assert_eq!(ledger, zeroed());
    }
}
