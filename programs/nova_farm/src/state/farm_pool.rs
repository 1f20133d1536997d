use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::error::FarmError;
use crate::math::mul_div_floor;
use crate::state::EmissionSchedule;

/// One staked-asset market with its own reward accumulator.
#[account]
#[derive(Default, Debug)]
pub struct FarmPool {
    pub authority: Pubkey,
    pub staking_mint: Pubkey,
    pub staking_vault: Pubkey,
    pub reward_vault: Pubkey,

    /// Emission weight.
    pub point: u64,
    /// Total deposited.
    pub amount: u64,

    pub last_reward_time: i64,
    /// Cumulative reward per deposited unit, scaled by `PRECISION`.
    pub acc_reward_per_share: u128,
    pub amount_multiplier: u64,
    /// Positions with a non-zero balance.
    pub total_user: u64,

    pub vault_bump: u8,
    pub bump: u8,
}

impl FarmPool {
    pub const LEN: usize = 8 + (32 * 4) + (8 * 2) + 8 + 16 + 8 + 8 + 2;

    /// Roll the accumulator forward to `now`.
    ///
    /// Emission for an interval in which nothing is staked is forfeited. The
    /// clock never moves backwards: a `now` at or before `last_reward_time`
    /// leaves the pool untouched, so repeated calls within one instant are
    /// no-ops.
    pub fn update(&mut self, schedule: &EmissionSchedule, now: i64) -> Result<()> {
        let elapsed = now
            .checked_sub(self.last_reward_time)
            .ok_or(FarmError::ArithmeticOverflow)?;
        if elapsed <= 0 {
            return Ok(());
        }

        let mut acc = self.acc_reward_per_share;
        if self.amount > 0 {
            require!(schedule.total_point > 0, FarmError::NotInitialized);

            let emitted = (elapsed as u128)
                .checked_mul(u128::from(schedule.token_per_second))
                .ok_or(FarmError::ArithmeticOverflow)?;
            let pool_reward = mul_div_floor(
                emitted,
                u128::from(self.point),
                u128::from(schedule.total_point),
            )?;
            let scaled_reward = pool_reward
                .checked_mul(PRECISION)
                .ok_or(FarmError::ArithmeticOverflow)?;
            let increment = mul_div_floor(
                scaled_reward,
                u128::from(self.amount_multiplier),
                u128::from(self.amount),
            )?;
            acc = acc
                .checked_add(increment)
                .ok_or(FarmError::ArithmeticOverflow)?;
        }

        self.acc_reward_per_share = acc;
        self.last_reward_time = now;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0 && self.total_user == 0
    }
}
