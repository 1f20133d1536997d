//! Unstake instruction handler.
//!
//! Handles withdrawing staked tokens from a pool.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::FarmError;
use crate::settlement;
use crate::state::{FarmPool, GlobalState, UserPosition};

/// Accounts required for unstaking.
#[derive(Accounts)]
pub struct Unstake<'info> {
    /// The participant unstaking tokens.
    pub owner: Signer<'info>,

    /// Global state, read for the emission schedule.
    #[account(seeds = [STATE_SEED], bump = state.bump)]
    pub state: Account<'info, GlobalState>,

    /// The pool being withdrawn from.
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

    /// Participant's token account receiving the tokens.
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

/// Unstake tokens from the pool.
///
/// Fails with `LockNotExpired` while the position's lock commitment runs.
/// Accrued reward stays on the position until harvested.
pub fn handler(ctx: Context<Unstake>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let schedule = ctx.accounts.state.schedule();
    let pool_key = ctx.accounts.pool.key();

    settlement::unstake(
        &pool_key,
        &mut ctx.accounts.pool,
        &mut ctx.accounts.user_position,
        &schedule,
        amount,
        clock.unix_timestamp,
    )?;

    // Transfer tokens from vault to user using pool PDA signer
    let staking_mint_key = ctx.accounts.pool.staking_mint;
    let seeds = &[
        POOL_SEED,
        staking_mint_key.as_ref(),
        &[ctx.accounts.pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.staking_vault.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.pool.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)?;

    msg!("Unstaked {} tokens", amount);
    msg!("Remaining staked: {}", ctx.accounts.user_position.amount);
    msg!("Unharvested reward: {}", ctx.accounts.user_position.reward_amount);

    Ok(())
}
