use anchor_lang::prelude::*;

use crate::error::FarmError;

/// Process-wide emission schedule and reward custody.
#[account]
#[derive(Default, Debug)]
pub struct GlobalState {
    pub authority: Pubkey,
    pub reward_mint: Pubkey,
    pub reward_vault: Pubkey,

    /// Sum of `point` across all live pools.
    pub total_point: u64,
    /// Number of live pools.
    pub pool_count: u64,

    pub start_time: i64,
    pub token_per_second: u64,

    pub total_funded: u64,
    pub total_paid: u64,

    pub reward_vault_bump: u8,
    pub bump: u8,
}

/// Rate and weight read together for a single settlement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmissionSchedule {
    pub token_per_second: u64,
    pub total_point: u64,
}

impl GlobalState {
    pub const LEN: usize = 8 + (32 * 3) + (8 * 2) + 8 + 8 + (8 * 2) + 2;

    pub fn schedule(&self) -> EmissionSchedule {
        EmissionSchedule {
            token_per_second: self.token_per_second,
            total_point: self.total_point,
        }
    }

    pub fn register_pool(&mut self, point: u64) -> Result<()> {
        self.total_point = self
            .total_point
            .checked_add(point)
            .ok_or(FarmError::ArithmeticOverflow)?;
        self.pool_count = self
            .pool_count
            .checked_add(1)
            .ok_or(FarmError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn deregister_pool(&mut self, point: u64) -> Result<()> {
        self.total_point = self
            .total_point
            .checked_sub(point)
            .ok_or(FarmError::ArithmeticOverflow)?;
        self.pool_count = self
            .pool_count
            .checked_sub(1)
            .ok_or(FarmError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_funding(&mut self, amount: u64) -> Result<()> {
        self.total_funded = self
            .total_funded
            .checked_add(amount)
            .ok_or(FarmError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_payout(&mut self, amount: u64) -> Result<()> {
        self.total_paid = self
            .total_paid
            .checked_add(amount)
            .ok_or(FarmError::ArithmeticOverflow)?;
        Ok(())
    }
}
