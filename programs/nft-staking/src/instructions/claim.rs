use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, MintTo, Token, TokenAccount},
};

use crate::constants::{CONFIG_SEED, REWARDS_MINT_SEED, USER_SEED};
use crate::state::{StakeConfig, UserAccount};

/// Claim accrued points as reward tokens
///
/// # Arguments
/// * `ctx` - The context containing all accounts
///
/// # Flow
/// 1. Convert the full point balance to reward base units (1 point = 10^6)
/// 2. Mint them to the user's reward token account, config PDA as authority
/// 3. Reset the point balance to zero
///
#[derive(Accounts)]
pub struct Claim<'info> {
    /// User claiming their rewards
    #[account(mut)]
    pub user: Signer<'info>,

    /// Global config; holds the reward mint authority
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, StakeConfig>,

    /// User's ledger
    #[account(
        mut,
        seeds = [USER_SEED, user.key().as_ref()],
        bump = user_account.bump
    )]
    pub user_account: Account<'info, UserAccount>,

    /// Reward token mint
    #[account(
        mut,
        seeds = [REWARDS_MINT_SEED, config.key().as_ref()],
        bump = config.reward_mint_bump
    )]
    pub rewards_mint: Account<'info, Mint>,

    /// User's reward token account, created on first claim
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = rewards_mint,
        associated_token::authority = user
    )]
    pub user_reward_ata: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler_claim(ctx: Context<Claim>) -> Result<()> {
    // Fails with NoPointsToClaim on an empty balance; the balance is only
    // zeroed once the conversion succeeds
    let amount = ctx.accounts.user_account.record_claim()?;

    // Mint the reward tokens; config PDA signs as mint authority
    let seeds = &[CONFIG_SEED, &[ctx.accounts.config.bump]];
    let signer_seeds = &[&seeds[..]];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.rewards_mint.to_account_info(),
                to: ctx.accounts.user_reward_ata.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!(
        "Claimed {} reward base units to {}",
        amount,
        ctx.accounts.user_reward_ata.key()
    );

    Ok(())
}
