/// Create state instruction handler.
///
/// Creates the global emission schedule, the empty lock bonus table and the
/// reward vault shared by every pool.
///
/// ## Security Guarantees
/// - State, lock bonus config and reward vault are singleton PDAs
/// - Reward vault authority is the state PDA (cannot be changed)
/// - Signer becomes the permanent authority for all admin instructions

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::state::{GlobalState, LockBonusConfig};

/// Accounts required for program state creation.
#[derive(Accounts)]
pub struct CreateState<'info> {
    /// The authority that will control pools, rates and funding.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Global state PDA.
    #[account(
        init,
        payer = authority,
        space = GlobalState::LEN,
        seeds = [STATE_SEED],
        bump
    )]
    pub state: Account<'info, GlobalState>,

    /// Lock bonus tier table PDA.
    #[account(
        init,
        payer = authority,
        space = LockBonusConfig::LEN,
        seeds = [LOCK_BONUS_SEED],
        bump
    )]
    pub lock_bonus: Account<'info, LockBonusConfig>,

    /// Mint every pool pays rewards in.
    pub reward_mint: Account<'info, Mint>,

    /// Vault holding funded rewards.
    /// SECURITY: PDA derived from REWARD_VAULT_SEED + state, owned by state.
    #[account(
        init,
        payer = authority,
        seeds = [REWARD_VAULT_SEED, state.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = state
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for token account creation.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Create the global state.
///
/// The emission rate starts at zero; the authority sets it with
/// `change_token_per_second` once pools exist.
pub fn handler(ctx: Context<CreateState>) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let state = &mut ctx.accounts.state;
    state.authority = authority;
    state.reward_mint = ctx.accounts.reward_mint.key();
    state.reward_vault = ctx.accounts.reward_vault.key();
    state.total_point = 0;
    state.pool_count = 0;
    state.start_time = clock.unix_timestamp;
    state.token_per_second = 0;
    state.total_funded = 0;
    state.total_paid = 0;
    state.reward_vault_bump = ctx.bumps.reward_vault;
    state.bump = ctx.bumps.state;

    let lock_bonus = &mut ctx.accounts.lock_bonus;
    lock_bonus.authority = authority;
    lock_bonus.tiers = Vec::new();
    lock_bonus.bump = ctx.bumps.lock_bonus;

    msg!("Nova Farm state created");
    msg!("Authority: {}", authority);
    msg!("Reward mint: {}", state.reward_mint);
    msg!("Epoch start: {}", state.start_time);

    Ok(())
}
