//! Change emission rate instruction handler.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::FarmError;
use crate::instructions::pool_sync::settle_live_pools;
use crate::state::GlobalState;

/// Accounts required for changing the emission rate.
///
/// Remaining accounts: every live `FarmPool`, writable.
#[derive(Accounts)]
pub struct ChangeTokenPerSecond<'info> {
    /// The program authority.
    pub authority: Signer<'info>,

    /// Global state holding the rate.
    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = state.bump,
        has_one = authority @ FarmError::Unauthorized
    )]
    pub state: Account<'info, GlobalState>,
}

/// Change the global reward emission rate.
///
/// All live pools are settled at the old rate first, so past emission is
/// never re-rated.
pub fn handler(ctx: Context<ChangeTokenPerSecond>, token_per_second: u64) -> Result<()> {
    let clock = Clock::get()?;
    let state = &mut ctx.accounts.state;

    settle_live_pools(
        ctx.remaining_accounts,
        &state.schedule(),
        clock.unix_timestamp,
        state.pool_count,
        None,
    )?;

    let previous = state.token_per_second;
    state.token_per_second = token_per_second;

    msg!("Emission rate changed: {} -> {} per second", previous, token_per_second);
    msg!("Pools settled: {}", state.pool_count);

    Ok(())
}
