use anchor_lang::prelude::*;

/// Global staking configuration
/// PDA: ["config"]
///
/// Created exactly once; there is no update instruction, so every field is
/// immutable after initialization. The reward token mint lives at a separate
/// PDA (["rewards_mint", config]) whose mint authority is this account.
#[account]
pub struct StakeConfig {
    /// Points awarded per full day a single NFT stays staked
    pub points_per_stake: u8,

    /// Ceiling on concurrent stakes per user
    pub max_stake: u8,

    /// Minimum seconds between stake and permitted unstake
    pub freeze_period: u32,

    /// Bump seed of the reward mint PDA
    pub reward_mint_bump: u8,

    /// Bump seed of this config PDA
    pub bump: u8,
}

impl StakeConfig {
    /// Account size for allocation
    pub const SIZE: usize = 8 + // discriminator
        1 +  // points_per_stake
        1 +  // max_stake
        4 +  // freeze_period
        1 +  // reward_mint_bump
        1 +  // bump
        16;  // padding for future fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_size_covers_serialized_len() {
        let config = StakeConfig {
            points_per_stake: 10,
            max_stake: 5,
            freeze_period: 86_400,
            reward_mint_bump: 254,
            bump: 255,
        };
        let data = config.try_to_vec().unwrap();
        assert!(8 + data.len() <= StakeConfig::SIZE);
    }
}
