//! Harvest instruction handler.
//!
//! Pays a position's settled reward plus its lock bonus from the reward vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::FarmError;
use crate::settlement;
use crate::state::{FarmPool, GlobalState, LockBonusConfig, UserPosition};

/// Accounts required for harvesting.
#[derive(Accounts)]
pub struct Harvest<'info> {
    /// The participant harvesting.
    pub owner: Signer<'info>,

    /// Global state; signs for the reward vault.
    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = state.bump,
        has_one = reward_vault @ FarmError::VaultMismatch
    )]
    pub state: Account<'info, GlobalState>,

    /// Lock bonus tiers.
    #[account(seeds = [LOCK_BONUS_SEED], bump = lock_bonus.bump)]
    pub lock_bonus: Account<'info, LockBonusConfig>,

    /// The pool the position belongs to.
    #[account(
        mut,
        seeds = [POOL_SEED, pool.staking_mint.as_ref()],
        bump = pool.bump,
        has_one = reward_vault @ FarmError::VaultMismatch
    )]
    pub pool: Account<'info, FarmPool>,

    /// The participant's position in this pool.
    #[account(
        mut,
        seeds = [USER_POSITION_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = user_position.bump,
        has_one = owner @ FarmError::Unauthorized,
        has_one = pool @ FarmError::PoolMismatch
    )]
    pub user_position: Account<'info, UserPosition>,

    /// Shared reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Participant's reward token account.
    #[account(
        mut,
        constraint = user_reward_account.mint == state.reward_mint @ FarmError::MintMismatch,
        constraint = user_reward_account.owner == owner.key() @ FarmError::Unauthorized
    )]
    pub user_reward_account: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Harvest accumulated rewards without unstaking.
///
/// Position balances are zeroed before the transfer CPI. Fails with
/// `InsufficientRewardFunding` rather than paying a truncated amount.
pub fn handler(ctx: Context<Harvest>) -> Result<()> {
    let clock = Clock::get()?;
    let schedule = ctx.accounts.state.schedule();
    let pool_key = ctx.accounts.pool.key();
    let vault_balance = ctx.accounts.reward_vault.amount;

    let payout = settlement::harvest(
        &pool_key,
        &mut ctx.accounts.pool,
        &mut ctx.accounts.user_position,
        &schedule,
        &ctx.accounts.lock_bonus,
        vault_balance,
        clock.unix_timestamp,
    )?;

    if payout == 0 {
        msg!("Nothing to harvest");
        return Ok(());
    }

    ctx.accounts.state.record_payout(payout)?;

    let seeds = &[STATE_SEED, &[ctx.accounts.state.bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.reward_vault.to_account_info(),
        to: ctx.accounts.user_reward_account.to_account_info(),
        authority: ctx.accounts.state.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, payout)?;

    msg!("Harvested {} reward tokens", payout);
    msg!("Lock duration: {}s", ctx.accounts.user_position.lock_duration);
    msg!("Total paid from vault: {}", ctx.accounts.state.total_paid);

    Ok(())
}
