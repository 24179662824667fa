use anchor_lang::prelude::*;

use crate::constants::USER_SEED;
use crate::state::UserAccount;

/// Create the per-user staking ledger
#[derive(Accounts)]
pub struct InitializeUser<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// User ledger PDA, one per wallet
    /// Re-initialization fails at allocation since the address is in use
    #[account(
        init,
        payer = user,
        space = UserAccount::SIZE,
        seeds = [USER_SEED, user.key().as_ref()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handler_initialize_user(ctx: Context<InitializeUser>) -> Result<()> {
    let user_account = &mut ctx.accounts.user_account;
    user_account.points = 0;
    user_account.amount_staked = 0;
    user_account.bump = ctx.bumps.user_account;

    msg!("User ledger created for {}", ctx.accounts.user.key());

    Ok(())
}
