use anchor_lang::prelude::*;

use crate::constants::SECONDS_PER_DAY;
use crate::error::StakeError;

/// Per-NFT stake record
/// PDA: ["stake", mint, config]
///
/// Exists exactly as long as the NFT is frozen under program custody: created
/// by `stake`, closed back to the owner by `unstake`. Keying by mint means an
/// NFT can be staked at most once globally, whoever holds it.
#[account]
pub struct StakeAccount {
    /// The wallet that staked the NFT; only this signer may unstake
    pub owner: Pubkey,

    /// Mint of the staked NFT
    pub mint: Pubkey,

    /// Unix timestamp recorded at stake time
    pub last_update: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl StakeAccount {
    /// Account size for allocation
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        32 + // mint
        8 +  // last_update
        1;   // bump

    /// Points accrued between stake time and `now`
    ///
    /// Earns `points_per_stake` per full day; partial days earn nothing
    /// (floor division). Every step is checked: a clock behind the stake time
    /// or an out-of-range day count surfaces as `ArithmeticOverflow`.
    pub fn accrued_points(&self, now: i64, points_per_stake: u8) -> Result<u32> {
        let elapsed = now
            .checked_sub(self.last_update)
            .ok_or(StakeError::ArithmeticOverflow)?;

        let days = elapsed
            .checked_div(SECONDS_PER_DAY)
            .ok_or(StakeError::ArithmeticOverflow)?;
        let days = u32::try_from(days).map_err(|_| StakeError::ArithmeticOverflow)?;

        let points = days
            .checked_mul(points_per_stake as u32)
            .ok_or(StakeError::ArithmeticOverflow)?;

        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(staked_at: i64) -> StakeAccount {
        StakeAccount {
            owner: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            last_update: staked_at,
            bump: 254,
        }
    }

    #[test]
    fn two_full_days_earn_twice_the_rate() {
        let stake = record(0);
        assert_eq!(stake.accrued_points(172_800, 10).unwrap(), 20);
    }

    #[test]
    fn partial_day_earns_nothing() {
        let stake = record(0);
        assert_eq!(stake.accrued_points(86_399, 10).unwrap(), 0);
        assert_eq!(stake.accrued_points(86_400, 10).unwrap(), 10);
    }

    #[test]
    fn accrual_is_relative_to_stake_time() {
        let stake = record(1_000_000);
        assert_eq!(stake.accrued_points(1_000_000 + 86_400, 7).unwrap(), 7);
    }

    #[test]
    fn clock_behind_stake_time_is_rejected() {
        let stake = record(86_400);
        assert_eq!(
            stake.accrued_points(0, 10),
            Err(StakeError::ArithmeticOverflow.into())
        );
    }

    #[test]
    fn absurd_elapsed_range_is_rejected() {
        let stake = record(0);
        assert_eq!(
            stake.accrued_points(i64::MAX, 255),
            Err(StakeError::ArithmeticOverflow.into())
        );
    }

    #[test]
    fn account_size_covers_serialized_len() {
        let stake = record(0);
        let data = stake.try_to_vec().unwrap();
        assert!(8 + data.len() <= StakeAccount::SIZE);
    }
}
