/// Close pool instruction handler.
///
/// Removes an empty pool and its weight from the emission schedule, and
/// closes its staking vault.
///
/// ## Security Guarantees
/// - Authority only
/// - Refuses while any stake or active position remains
/// - Every other live pool is settled before the total point shrinks

use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Token, TokenAccount};

use crate::constants::*;
use crate::error::FarmError;
use crate::instructions::pool_sync::settle_live_pools;
use crate::settlement;
use crate::state::{FarmPool, GlobalState};

/// Accounts required for closing a pool.
///
/// Remaining accounts: every other live `FarmPool`, writable.
#[derive(Accounts)]
pub struct ClosePool<'info> {
    /// The program authority; receives the pool's rent.
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

    /// The pool to close.
    #[account(
        mut,
        seeds = [POOL_SEED, pool.staking_mint.as_ref()],
        bump = pool.bump,
        has_one = authority @ FarmError::Unauthorized,
        has_one = staking_vault @ FarmError::VaultMismatch,
        close = authority
    )]
    pub pool: Account<'info, FarmPool>,

    /// The pool's staking vault; its rent goes to the authority.
    #[account(mut)]
    pub staking_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Close an empty pool.
pub fn handler(ctx: Context<ClosePool>) -> Result<()> {
    let clock = Clock::get()?;
    let pool = &ctx.accounts.pool;
    let pool_key = pool.key();
    let point = pool.point;
    let state = &mut ctx.accounts.state;

    let others = state
        .pool_count
        .checked_sub(1)
        .ok_or(FarmError::ArithmeticOverflow)?;
    settle_live_pools(
        ctx.remaining_accounts,
        &state.schedule(),
        clock.unix_timestamp,
        others,
        Some(&pool_key),
    )?;
    settlement::close_pool(state, pool, ctx.accounts.staking_vault.amount)?;

    let staking_mint_key = pool.staking_mint;
    let seeds = &[POOL_SEED, staking_mint_key.as_ref(), &[pool.bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = CloseAccount {
        account: ctx.accounts.staking_vault.to_account_info(),
        destination: ctx.accounts.authority.to_account_info(),
        authority: pool.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::close_account(cpi_ctx)?;

    msg!("Pool {} closed", pool_key);
    msg!("Point released: {} (total {})", point, state.total_point);
    msg!("Live pools: {}", state.pool_count);

    Ok(())
}
