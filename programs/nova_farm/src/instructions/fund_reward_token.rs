/// Fund reward instruction handler.
///
/// Deposits reward tokens into the shared reward vault.
///
/// ## Security Guarantees
/// - Authority only
/// - Vault must be the one recorded on state
/// - Funding account must hold the reward mint

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::FarmError;
use crate::state::GlobalState;

/// Accounts required for funding rewards.
#[derive(Accounts)]
pub struct FundRewardToken<'info> {
    /// The program authority.
    pub authority: Signer<'info>,

    /// Global state.
    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = state.bump,
        has_one = authority @ FarmError::Unauthorized,
        has_one = reward_vault @ FarmError::VaultMismatch
    )]
    pub state: Account<'info, GlobalState>,

    /// Reward vault receiving the funds.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Authority's reward token account.
    #[account(
        mut,
        constraint = funder_token_account.mint == state.reward_mint @ FarmError::MintMismatch,
        constraint = funder_token_account.owner == authority.key() @ FarmError::Unauthorized
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Fund the reward vault.
///
/// Pure deposit: no pool accumulator is touched.
pub fn handler(ctx: Context<FundRewardToken>, amount: u64) -> Result<()> {
    require!(amount > 0, FarmError::InvalidAmount);

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.reward_vault.to_account_info(),
        authority: ctx.accounts.authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let state = &mut ctx.accounts.state;
    state.record_funding(amount)?;

    ctx.accounts.reward_vault.reload()?;

    msg!("Reward vault funded with {} tokens", amount);
    msg!("New reward vault balance: {}", ctx.accounts.reward_vault.amount);
    msg!("Total funded: {}", ctx.accounts.state.total_funded);

    Ok(())
}
