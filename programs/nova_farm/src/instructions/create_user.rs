//! Create user instruction handler.
//!
//! Creates a participant's position record for one pool.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{FarmPool, UserPosition};

/// Accounts required for creating a user position.
#[derive(Accounts)]
pub struct CreateUser<'info> {
    /// The participant.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The pool the position belongs to.
    #[account(
        seeds = [POOL_SEED, pool.staking_mint.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, FarmPool>,

    /// Position PDA, one per (pool, owner).
    #[account(
        init,
        payer = owner,
        space = UserPosition::LEN,
        seeds = [USER_POSITION_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub user_position: Account<'info, UserPosition>,

    /// System program.
    pub system_program: Program<'info, System>,
}

/// Create an empty position. The pool's user count moves on first stake.
pub fn handler(ctx: Context<CreateUser>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let pool = ctx.accounts.pool.key();

    ctx.accounts
        .user_position
        .initialize(owner, pool, ctx.bumps.user_position)?;

    msg!("Position created for {} in pool {}", owner, pool);

    Ok(())
}
