use anchor_lang::prelude::*;

use crate::constants::REWARD_UNITS_PER_POINT;
use crate::error::StakeError;

/// Per-user staking ledger
/// PDA: ["user", owner]
///
/// Tracks the unclaimed point balance and the number of live stake records.
/// Created once per wallet; a second initialization fails at allocation.
#[account]
pub struct UserAccount {
    /// Unclaimed points, accrued on unstake and zeroed on claim.
    /// u32 holds over 4 billion points; the claim conversion below is done
    /// in u64, so the 10^6 scale-up cannot overflow the claim arithmetic.
    pub points: u32,

    /// Number of currently active stake records owned by this user
    /// Invariant: amount_staked <= config.max_stake
    pub amount_staked: u8,

    /// PDA bump seed
    pub bump: u8,
}

impl UserAccount {
    /// Account size for allocation
    pub const SIZE: usize = 8 + // discriminator
        4 + // points
        1 + // amount_staked
        1 + // bump
        8;  // padding for future fields

    /// Record a new stake against this ledger
    ///
    /// Fails with `MaxStakeReached` once the user is at the configured cap.
    pub fn record_stake(&mut self, max_stake: u8) -> Result<()> {
        require!(self.amount_staked < max_stake, StakeError::MaxStakeReached);

        self.amount_staked = self
            .amount_staked
            .checked_add(1)
            .ok_or(StakeError::ArithmeticOverflow)?;

        Ok(())
    }

    /// Record an unstake: credit the points earned and release one stake slot
    ///
    /// Both updates are checked; an overflow aborts the whole instruction so
    /// no partial credit is ever observable.
    pub fn record_unstake(&mut self, earned: u32) -> Result<()> {
        self.points = self
            .points
            .checked_add(earned)
            .ok_or(StakeError::ArithmeticOverflow)?;

        self.amount_staked = self
            .amount_staked
            .checked_sub(1)
            .ok_or(StakeError::ArithmeticOverflow)?;

        Ok(())
    }

    /// Convert the full point balance into reward token base units and reset it
    ///
    /// Returns the amount to mint. The balance is left untouched when the
    /// conversion fails.
    pub fn record_claim(&mut self) -> Result<u64> {
        require!(self.points > 0, StakeError::NoPointsToClaim);

        let amount = (self.points as u64)
            .checked_mul(REWARD_UNITS_PER_POINT)
            .ok_or(StakeError::ArithmeticOverflow)?;

        self.points = 0;

        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> UserAccount {
        UserAccount {
            points: 0,
            amount_staked: 0,
            bump: 255,
        }
    }

    #[test]
    fn stake_count_stops_at_cap() {
        let mut user = ledger();
        for _ in 0..3 {
            user.record_stake(3).unwrap();
        }
        assert_eq!(user.amount_staked, 3);

        assert_eq!(user.record_stake(3), Err(StakeError::MaxStakeReached.into()));
        assert_eq!(user.amount_staked, 3);
    }

    #[test]
    fn unstake_credits_points_and_releases_slot() {
        let mut user = ledger();
        user.record_stake(5).unwrap();
        user.record_stake(5).unwrap();

        user.record_unstake(20).unwrap();
        assert_eq!(user.points, 20);
        assert_eq!(user.amount_staked, 1);
    }

    #[test]
    fn point_credit_overflow_is_rejected() {
        let mut user = ledger();
        user.record_stake(1).unwrap();
        user.points = u32::MAX - 5;

        assert_eq!(
            user.record_unstake(10),
            Err(StakeError::ArithmeticOverflow.into())
        );
    }

    #[test]
    fn unstake_with_no_active_stake_is_rejected() {
        let mut user = ledger();
        assert_eq!(
            user.record_unstake(0),
            Err(StakeError::ArithmeticOverflow.into())
        );
    }

    #[test]
    fn claim_with_zero_points_is_rejected() {
        let mut user = ledger();
        assert_eq!(user.record_claim(), Err(StakeError::NoPointsToClaim.into()));
    }

    #[test]
    fn claim_scales_points_to_base_units() {
        let mut user = ledger();
        user.points = 100;

        assert_eq!(user.record_claim().unwrap(), 100_000_000);
        assert_eq!(user.points, 0);
    }

    // points is u32: the widest possible balance still converts to base
    // units without overflowing the u64 claim arithmetic.
    #[test]
    fn claim_of_max_balance_fits_in_u64() {
        let mut user = ledger();
        user.points = u32::MAX;

        let amount = user.record_claim().unwrap();
        assert_eq!(amount, u32::MAX as u64 * REWARD_UNITS_PER_POINT);
    }

    #[test]
    fn account_size_covers_serialized_len() {
        let user = ledger();
        let data = user.try_to_vec().unwrap();
        assert!(8 + data.len() <= UserAccount::SIZE);
    }
}
