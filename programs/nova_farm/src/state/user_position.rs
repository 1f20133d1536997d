use anchor_lang::prelude::*;

use crate::error::FarmError;
use crate::math::{share_checkpoint, unscale};
use crate::state::FarmPool;

/// A participant's stake in one pool.
#[account]
#[derive(Default, Debug)]
pub struct UserPosition {
    pub owner: Pubkey,
    pub pool: Pubkey,

    pub amount: u64,

    /// Settled, unharvested base reward.
    pub reward_amount: u128,
    /// Settled, unharvested lock bonus.
    pub extra_reward: u128,
    /// `amount * acc_reward_per_share` at the last settlement, unscaled so
    /// that re-basing at a new amount never rounds in the position's favour.
    pub reward_debt: u128,

    pub last_stake_time: i64,
    pub lock_duration: i64,

    pub bump: u8,
}

impl UserPosition {
    pub const LEN: usize = 8 + 32 + 32 + 8 + (16 * 3) + 8 + 8 + 1;

    pub fn initialize(&mut self, owner: Pubkey, pool: Pubkey, bump: u8) -> Result<()> {
        require!(self.pool == Pubkey::default(), FarmError::AlreadyInitialized);
        self.owner = owner;
        self.pool = pool;
        self.bump = bump;
        Ok(())
    }

    /// Credit reward accrued since the last checkpoint and move the
    /// checkpoint to the pool's current index. Returns the amount credited.
    pub fn calculate_reward_amount(&mut self, pool_key: &Pubkey, pool: &FarmPool) -> Result<u128> {
        require_keys_eq!(self.pool, *pool_key, FarmError::PoolMismatch);

        let accrued = share_checkpoint(self.amount, pool.acc_reward_per_share)?;
        let pending = unscale(
            accrued
                .checked_sub(self.reward_debt)
                .ok_or(FarmError::ArithmeticOverflow)?,
        );
        self.reward_amount = self
            .reward_amount
            .checked_add(pending)
            .ok_or(FarmError::ArithmeticOverflow)?;
        self.reward_debt = accrued;
        Ok(pending)
    }

    pub fn calculate_reward_debt(&mut self, pool: &FarmPool) -> Result<()> {
        self.reward_debt = share_checkpoint(self.amount, pool.acc_reward_per_share)?;
        Ok(())
    }

    pub fn is_lock_ended(&self, now: i64) -> Result<bool> {
        if self.lock_duration <= 0 {
            return Ok(true);
        }
        let unlock_time = self
            .last_stake_time
            .checked_add(self.lock_duration)
            .ok_or(FarmError::ArithmeticOverflow)?;
        Ok(now >= unlock_time)
    }
}
