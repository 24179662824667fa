use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::{CONFIG_SEED, REWARDS_MINT_SEED, REWARD_DECIMALS};
use crate::error::StakeError;
use crate::state::StakeConfig;

/// Initialize the global staking configuration
///
/// # Arguments
/// * `ctx` - The context containing all accounts
/// * `points_per_stake` - Points per full day staked, per NFT
/// * `max_stake` - Ceiling on concurrent stakes per user
/// * `freeze_period` - Minimum seconds between stake and unstake
///
/// # Flow
/// 1. Validate all parameters are non-zero
/// 2. Create the config PDA and the reward mint PDA it controls
/// 3. Store the parameters and both bump seeds
///
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// Authority creating the configuration (signer, payer)
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global config PDA
    /// A second invocation fails here: the address is already in use, so the
    /// `init` allocation is rejected by the system program.
    #[account(
        init,
        payer = admin,
        space = StakeConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, StakeConfig>,

    /// Reward token mint, minted exclusively under the config PDA's authority
    #[account(
        init,
        payer = admin,
        seeds = [REWARDS_MINT_SEED, config.key().as_ref()],
        bump,
        mint::decimals = REWARD_DECIMALS,
        mint::authority = config
    )]
    pub rewards_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn handler_initialize_config(
    ctx: Context<InitializeConfig>,
    points_per_stake: u8,
    max_stake: u8,
    freeze_period: u32,
) -> Result<()> {
    // Validate parameters
    require!(points_per_stake > 0, StakeError::InvalidConfiguration);
    require!(max_stake > 0, StakeError::InvalidConfiguration);
    require!(freeze_period > 0, StakeError::InvalidConfiguration);

    let config = &mut ctx.accounts.config;
    config.points_per_stake = points_per_stake;
    config.max_stake = max_stake;
    config.freeze_period = freeze_period;

    // Store bump seeds
    config.reward_mint_bump = ctx.bumps.rewards_mint;
    config.bump = ctx.bumps.config;

    msg!(
        "Config initialized: points_per_stake={}, max_stake={}, freeze_period={}s, rewards_mint={}",
        points_per_stake,
        max_stake,
        freeze_period,
        ctx.accounts.rewards_mint.key()
    );

    Ok(())
}
