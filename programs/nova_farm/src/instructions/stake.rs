//! Stake instruction handler.
//!
//! Handles depositing staking tokens into a pool.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::FarmError;
use crate::settlement;
use crate::state::{FarmPool, GlobalState, UserPosition};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The participant staking tokens.
    pub owner: Signer<'info>,

    /// Global state, read for the emission schedule.
    #[account(seeds = [STATE_SEED], bump = state.bump)]
    pub state: Account<'info, GlobalState>,

    /// The pool being staked into.
    #[account(
        mut,
        seeds = [POOL_SEED, pool.staking_mint.as_ref()],
        bump = pool.bump,
        has_one = staking_vault @ FarmError::VaultMismatch
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

    /// Participant's token account for the staking mint.
    #[account(
        mut,
        constraint = user_token_account.mint == pool.staking_mint @ FarmError::MintMismatch,
        constraint = user_token_account.owner == owner.key() @ FarmError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Pool's staking vault.
    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Stake tokens into the pool.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `amount` - Amount of tokens to stake
/// * `lock_duration` - Lock commitment in seconds; replaces any earlier one
pub fn handler(ctx: Context<Stake>, amount: u64, lock_duration: Option<i64>) -> Result<()> {
    let clock = Clock::get()?;
    let schedule = ctx.accounts.state.schedule();
    let pool_key = ctx.accounts.pool.key();
    let lock_duration = lock_duration.unwrap_or(0);

    settlement::stake(
        &pool_key,
        &mut ctx.accounts.pool,
        &mut ctx.accounts.user_position,
        &schedule,
        amount,
        lock_duration,
        clock.unix_timestamp,
    )?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.staking_vault.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    msg!("Staked {} tokens (lock {}s)", amount, lock_duration);
    msg!("Total staked by user: {}", ctx.accounts.user_position.amount);
    msg!("Pool total: {}", ctx.accounts.pool.amount);

    Ok(())
}
