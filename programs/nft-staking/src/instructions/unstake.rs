use anchor_lang::prelude::*;
use anchor_spl::{
    metadata::{
        mpl_token_metadata::instructions::{
            ThawDelegatedAccountCpi, ThawDelegatedAccountCpiAccounts,
        },
        MasterEditionAccount, Metadata,
    },
    token::{self, Mint, Revoke, Token, TokenAccount},
};

use crate::constants::{CONFIG_SEED, STAKE_SEED, USER_SEED};
use crate::error::StakeError;
use crate::state::{StakeAccount, StakeConfig, UserAccount};

/// Unstake an NFT after the freeze period has elapsed
///
/// # Arguments
/// * `ctx` - The context containing all accounts
///
/// # Flow
/// 1. Verify the signer owns the stake record and the freeze period is over
/// 2. Credit points for every full day staked to the user ledger
/// 3. Thaw the token account and revoke the stake PDA's delegation
/// 4. Close the stake record, refunding its rent to the owner
///
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// User unstaking their NFT
    #[account(mut)]
    pub user: Signer<'info>,

    /// Mint of the staked NFT; must match the stake record
    #[account(
        constraint = stake_account.mint == mint.key() @ StakeError::IncorrectMint
    )]
    pub mint: Account<'info, Mint>,

    /// User's token account holding the frozen NFT
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = user
    )]
    pub mint_ata: Account<'info, TokenAccount>,

    /// NFT master edition, required by the thaw CPI
    #[account(
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            mint.key().as_ref(),
            b"edition"
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub edition: Account<'info, MasterEditionAccount>,

    /// Global config
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, StakeConfig>,

    /// Stake record for this NFT; closed to the owner on success
    #[account(
        mut,
        seeds = [STAKE_SEED, mint.key().as_ref(), config.key().as_ref()],
        bump = stake_account.bump,
        close = user,
        constraint = stake_account.owner == user.key() @ StakeError::Unauthorized
    )]
    pub stake_account: Account<'info, StakeAccount>,

    /// User's ledger
    #[account(
        mut,
        seeds = [USER_SEED, user.key().as_ref()],
        bump = user_account.bump
    )]
    pub user_account: Account<'info, UserAccount>,

    pub metadata_program: Program<'info, Metadata>,
    pub token_program: Program<'info, Token>,
}

pub fn handler_unstake(ctx: Context<Unstake>) -> Result<()> {
    let config = &ctx.accounts.config;
    let now = Clock::get()?.unix_timestamp;

    // Enforce the freeze period
    let elapsed = now
        .checked_sub(ctx.accounts.stake_account.last_update)
        .ok_or(StakeError::ArithmeticOverflow)?;
    require!(
        elapsed >= config.freeze_period as i64,
        StakeError::UnstakeDelayNotMet
    );

    // Credit points for every full day staked; partial days earn nothing
    let earned = ctx
        .accounts
        .stake_account
        .accrued_points(now, config.points_per_stake)?;
    ctx.accounts.user_account.record_unstake(earned)?;

    // Thaw the frozen token account; stake PDA signs as the delegate
    let mint_key = ctx.accounts.mint.key();
    let config_key = ctx.accounts.config.key();
    let seeds = &[
        STAKE_SEED,
        mint_key.as_ref(),
        config_key.as_ref(),
        &[ctx.accounts.stake_account.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let delegate = &ctx.accounts.stake_account.to_account_info();
    let token_account = &ctx.accounts.mint_ata.to_account_info();
    let edition = &ctx.accounts.edition.to_account_info();
    let mint = &ctx.accounts.mint.to_account_info();
    let token_program = &ctx.accounts.token_program.to_account_info();
    let metadata_program = &ctx.accounts.metadata_program.to_account_info();

    ThawDelegatedAccountCpi::new(
        metadata_program,
        ThawDelegatedAccountCpiAccounts {
            delegate,
            token_account,
            edition,
            mint,
            token_program,
        },
    )
    .invoke_signed(signer_seeds)?;

    // Clear the delegation now that the account is thawed
    token::revoke(CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Revoke {
            source: ctx.accounts.mint_ata.to_account_info(),
            authority: ctx.accounts.user.to_account_info(),
        },
    ))?;

    msg!(
        "Unstaked NFT {}. Earned {} points, unclaimed total: {}, active stakes: {}",
        mint_key,
        earned,
        ctx.accounts.user_account.points,
        ctx.accounts.user_account.amount_staked
    );

    Ok(())
}
