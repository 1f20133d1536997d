//! # Nova Farm Program
//!
//! A multi-pool yield farming program. Participants stake a pool's asset and
//! earn a share of one global reward stream, split between pools by weight
//! ("point") and within a pool by deposit.
//!
//! ## Features
//! - Accumulated-reward-per-share accounting: no per-participant iteration
//! - Point-weighted emission across any number of pools
//! - Optional lock commitments with tiered harvest bonuses
//! - Treasury-funded rewards; harvest never pays more than the vault holds
//! - Checked fixed-point math, rounding always in the vault's favour
//!
//! ## Devnet Only
//! This program is configured for Solana devnet deployment only.

use anchor_lang::prelude::*;

declare_id!("8nXUyZ3dhW1w5dCp4m6kYqkLtq2QtqGkJ7KpD2vF8sQm");

pub mod constants;
pub mod error;
pub mod instructions;
pub mod math;
pub mod settlement;
pub mod state;

use instructions::*;
use state::LockBonusTier;

#[program]
pub mod nova_farm {
    use super::*;

    /// Creates the global state, lock bonus table and reward vault.
    ///
    /// # Errors
    /// Returns an error if the state already exists.
    pub fn create_state(ctx: Context<CreateState>) -> Result<()> {
        instructions::create_state::handler(ctx)
    }

    /// Registers a new pool for a staking mint.
    ///
    /// Every live pool must be passed as a writable remaining account.
    ///
    /// # Arguments
    /// * `point` - Emission weight of the pool
    /// * `amount_multiplier` - Per-pool reward scale (1 = neutral)
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the authority
    /// - Point is zero or multiplier below one
    /// - A pool for the mint already exists
    /// - Remaining accounts do not cover every live pool
    pub fn create_pool(ctx: Context<CreatePool>, point: u64, amount_multiplier: u64) -> Result<()> {
        instructions::create_pool::handler(ctx, point, amount_multiplier)
    }

    /// Changes the global reward emission rate.
    ///
    /// Every live pool must be passed as a writable remaining account.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority or a live pool
    /// is missing.
    pub fn change_token_per_second(
        ctx: Context<ChangeTokenPerSecond>,
        token_per_second: u64,
    ) -> Result<()> {
        instructions::change_token_per_second::handler(ctx, token_per_second)
    }

    /// Deposits reward tokens into the reward vault.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority or amount is zero.
    pub fn fund_reward_token(ctx: Context<FundRewardToken>, amount: u64) -> Result<()> {
        instructions::fund_reward_token::handler(ctx, amount)
    }

    /// Creates the caller's position in a pool.
    pub fn create_user(ctx: Context<CreateUser>) -> Result<()> {
        instructions::create_user::handler(ctx)
    }

    /// Stakes tokens, optionally with a lock commitment in seconds.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - Lock duration is negative or too long
    /// - Insufficient token balance
    pub fn stake(ctx: Context<Stake>, amount: u64, lock_duration: Option<i64>) -> Result<()> {
        instructions::stake::handler(ctx, amount, lock_duration)
    }

    /// Unstakes tokens.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero or exceeds the staked balance
    /// - Lock period has not ended
    pub fn unstake(ctx: Context<Unstake>, amount: u64) -> Result<()> {
        instructions::unstake::handler(ctx, amount)
    }

    /// Pays out accumulated reward plus lock bonus.
    ///
    /// # Errors
    /// Returns an error if the reward vault cannot cover the payout.
    pub fn harvest(ctx: Context<Harvest>) -> Result<()> {
        instructions::harvest::handler(ctx)
    }

    /// Closes an empty pool.
    ///
    /// Every other live pool must be passed as a writable remaining account.
    ///
    /// # Errors
    /// Returns an error if the pool still has stake or active positions.
    pub fn close_pool(ctx: Context<ClosePool>) -> Result<()> {
        instructions::close_pool::handler(ctx)
    }

    /// Replaces the lock bonus tier table.
    ///
    /// # Errors
    /// Returns an error if the caller is not the authority or the tiers are
    /// not strictly increasing.
    pub fn set_lock_bonus_tiers(
        ctx: Context<SetLockBonusTiers>,
        tiers: Vec<LockBonusTier>,
    ) -> Result<()> {
        instructions::set_lock_bonus_tiers::handler(ctx, tiers)
    }
}
