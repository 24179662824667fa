use anchor_lang::prelude::*;
use anchor_spl::{
    metadata::{
        mpl_token_metadata::instructions::{
            FreezeDelegatedAccountCpi, FreezeDelegatedAccountCpiAccounts,
        },
        MasterEditionAccount, Metadata, MetadataAccount,
    },
    token::{self, Approve, Mint, Token, TokenAccount},
};

use crate::constants::{CONFIG_SEED, STAKE_SEED, USER_SEED};
use crate::error::StakeError;
use crate::state::{StakeAccount, StakeConfig, UserAccount};

/// Stake an NFT from the verified collection
///
/// # Arguments
/// * `ctx` - The context containing all accounts
///
/// # Flow
/// 1. Validate the signer holds exactly one unit of the mint and that the
///    NFT's metadata attests verified membership in the collection
/// 2. Check the user is below the concurrent-stake cap and open the stake
///    record with the current timestamp
/// 3. Delegate the token account to the stake PDA and freeze it in place
///
/// The NFT never leaves the owner's token account; freezing makes it
/// untransferable until `unstake` thaws it.
///
#[derive(Accounts)]
pub struct Stake<'info> {
    /// User staking their NFT
    #[account(mut)]
    pub user: Signer<'info>,

    /// Mint of the NFT being staked
    pub mint: Account<'info, Mint>,

    /// Mint of the collection the NFT must belong to
    pub collection_mint: Account<'info, Mint>,

    /// User's token account holding the NFT
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = user,
        constraint = mint_ata.amount == 1 @ StakeError::IncorrectMint
    )]
    pub mint_ata: Account<'info, TokenAccount>,

    /// NFT metadata; must declare verified membership in `collection_mint`
    #[account(
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            mint.key().as_ref()
        ],
        seeds::program = metadata_program.key(),
        bump,
        constraint = metadata.collection.as_ref().unwrap().key.as_ref()
            == collection_mint.key().as_ref() @ StakeError::IncorrectCollection,
        constraint = metadata.collection.as_ref().unwrap().verified
            @ StakeError::CollectionNotVerified,
    )]
    pub metadata: Account<'info, MetadataAccount>,

    /// NFT master edition, required by the freeze CPI
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

    /// Stake record PDA for this NFT; its existence means the NFT is locked
    #[account(
        init,
        payer = user,
        space = StakeAccount::SIZE,
        seeds = [STAKE_SEED, mint.key().as_ref(), config.key().as_ref()],
        bump
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
    pub system_program: Program<'info, System>,
}

pub fn handler_stake(ctx: Context<Stake>) -> Result<()> {
    let max_stake = ctx.accounts.config.max_stake;

    // Enforce the concurrent-stake cap and take a slot
    ctx.accounts.user_account.record_stake(max_stake)?;

    // Open the stake record at the current timestamp
    let stake_account = &mut ctx.accounts.stake_account;
    stake_account.owner = ctx.accounts.user.key();
    stake_account.mint = ctx.accounts.mint.key();
    stake_account.last_update = Clock::get()?.unix_timestamp;
    stake_account.bump = ctx.bumps.stake_account;

    // Delegate one unit to the stake PDA so it can freeze and later thaw
    token::approve(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Approve {
                to: ctx.accounts.mint_ata.to_account_info(),
                delegate: ctx.accounts.stake_account.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        1,
    )?;

    // Freeze the NFT in the user's token account; stake PDA signs as delegate
    let mint_key = ctx.accounts.mint.key();
    let config_key = ctx.accounts.config.key();
    let seeds = &[
        STAKE_SEED,
        mint_key.as_ref(),
        config_key.as_ref(),
        &[ctx.bumps.stake_account],
    ];
    let signer_seeds = &[&seeds[..]];

    let delegate = &ctx.accounts.stake_account.to_account_info();
    let token_account = &ctx.accounts.mint_ata.to_account_info();
    let edition = &ctx.accounts.edition.to_account_info();
    let mint = &ctx.accounts.mint.to_account_info();
    let token_program = &ctx.accounts.token_program.to_account_info();
    let metadata_program = &ctx.accounts.metadata_program.to_account_info();

    FreezeDelegatedAccountCpi::new(
        metadata_program,
        FreezeDelegatedAccountCpiAccounts {
            delegate,
            token_account,
            edition,
            mint,
            token_program,
        },
    )
    .invoke_signed(signer_seeds)?;

    msg!(
        "Staked NFT {}. Active stakes: {}/{}",
        mint_key,
        ctx.accounts.user_account.amount_staked,
        max_stake
    );

    Ok(())
}
