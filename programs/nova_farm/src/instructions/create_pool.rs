/// Create pool instruction handler.
///
/// Registers a staking mint as a new farm pool with an emission weight.
///
/// ## Security Guarantees
/// - Authority only (has_one on state)
/// - One pool per staking mint (PDA seeded by mint)
/// - Every live pool is settled under the old total point before the new
///   weight dilutes their share

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::FarmError;
use crate::instructions::pool_sync::settle_live_pools;
use crate::state::{FarmPool, GlobalState};

/// Accounts required for pool creation.
///
/// Remaining accounts: every live `FarmPool`, writable.
#[derive(Accounts)]
pub struct CreatePool<'info> {
    /// The program authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Global state.
    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = state.bump,
        has_one = authority @ FarmError::Unauthorized
    )]
    pub state: Account<'info, GlobalState>,

    /// The pool account to be created.
    #[account(
        init,
        payer = authority,
        space = FarmPool::LEN,
        seeds = [POOL_SEED, staking_mint.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, FarmPool>,

    /// Mint participants stake into this pool.
    pub staking_mint: Account<'info, Mint>,

    /// Vault holding staked tokens.
    /// SECURITY: PDA derived from POOL_VAULT_SEED + pool, owned by pool.
    #[account(
        init,
        payer = authority,
        seeds = [POOL_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = pool
    )]
    pub staking_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for token account creation.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Create a farm pool.
///
/// # Arguments
/// * `ctx` - CreatePool accounts context
/// * `point` - Emission weight of the pool
/// * `amount_multiplier` - Per-pool scale applied to accrued reward per share
pub fn handler(ctx: Context<CreatePool>, point: u64, amount_multiplier: u64) -> Result<()> {
    require!(point > 0, FarmError::InvalidPoint);
    require!(amount_multiplier >= 1, FarmError::InvalidAmountMultiplier);

    let clock = Clock::get()?;
    let state = &mut ctx.accounts.state;

    settle_live_pools(
        ctx.remaining_accounts,
        &state.schedule(),
        clock.unix_timestamp,
        state.pool_count,
        None,
    )?;
    state.register_pool(point)?;

    let pool = &mut ctx.accounts.pool;
    pool.authority = ctx.accounts.authority.key();
    pool.staking_mint = ctx.accounts.staking_mint.key();
    pool.staking_vault = ctx.accounts.staking_vault.key();
    pool.reward_vault = state.reward_vault;
    pool.point = point;
    pool.amount = 0;
    pool.last_reward_time = clock.unix_timestamp;
    pool.acc_reward_per_share = 0;
    pool.amount_multiplier = amount_multiplier;
    pool.total_user = 0;
    pool.vault_bump = ctx.bumps.staking_vault;
    pool.bump = ctx.bumps.pool;

    msg!("Pool created for mint {}", pool.staking_mint);
    msg!("Point: {} (total {})", point, state.total_point);
    msg!("Live pools: {}", state.pool_count);

    Ok(())
}
