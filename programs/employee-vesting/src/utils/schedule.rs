//! Cliff-plus-linear vesting math.
//! - before `cliff`: nothing is vested
//! - at or after `end`: the full `total` is vested
//! - otherwise: `total * (now - start) / (end - start)`, computed in u128

use crate::error::VestingError;

/// Amount of `total` vested at `now`. Callers guarantee `start <= cliff <= end`.
pub fn vested_amount(
    total: u64,
    start: i64,
    cliff: i64,
    end: i64,
    now: i64,
) -> Result<u64, VestingError> {
    if now < cliff {
        return Ok(0);
    }
    if now >= end {
        return Ok(total);
    }
    // start <= cliff <= now < end, so both spans are positive.
    let elapsed = (now as i128)
        .checked_sub(start as i128)
        .ok_or(VestingError::MathOverflow)?;
    let duration = (end as i128)
        .checked_sub(start as i128)
        .ok_or(VestingError::MathOverflow)?;
    if elapsed < 0 || duration <= 0 {
        return Err(VestingError::InvalidSchedule);
    }
    let v = (total as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration as u128)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

/// Vested minus already withdrawn.
pub fn claimable_amount(vested: u64, withdrawn: u64) -> Result<u64, VestingError> {
    vested.checked_sub(withdrawn).ok_or(VestingError::MathOverflow)
}
