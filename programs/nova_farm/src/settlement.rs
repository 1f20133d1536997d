//! Settlement engine.
//!
//! Every state-changing instruction runs through here before touching token
//! balances: the pool accumulator is rolled forward to `now`, the acting
//! position is reconciled against it, and only then is the requested change
//! applied. Each transition works on copies of the pool and position and
//! writes them back only when every step succeeded.
//!
//! Nothing in this module performs CPI or reads sysvars, so the handlers pass
//! in the clock and vault balances they observed.

use anchor_lang::prelude::*;

use crate::constants::{MAX_LOCK_DURATION, PERCENT_DENOMINATOR};
use crate::error::FarmError;
use crate::math::{mul_div_floor, to_u64};
use crate::state::{EmissionSchedule, FarmPool, GlobalState, LockBonusConfig, UserPosition};

/// Roll `pool` forward to `now` and, if given, credit `position` with the
/// reward accrued since its last checkpoint.
pub fn settle(
    pool_key: &Pubkey,
    pool: &mut FarmPool,
    position: Option<&mut UserPosition>,
    schedule: &EmissionSchedule,
    now: i64,
) -> Result<()> {
    let mut next_pool = pool.clone();
    next_pool.update(schedule, now)?;

    if let Some(position) = position {
        let mut next_position = position.clone();
        next_position.calculate_reward_amount(pool_key, &next_pool)?;
        *position = next_position;
    }

    *pool = next_pool;
    Ok(())
}

/// Deposit `amount` into `pool` on behalf of `position`.
///
/// The lock commitment is overwritten and its clock restarts at `now`.
pub fn stake(
    pool_key: &Pubkey,
    pool: &mut FarmPool,
    position: &mut UserPosition,
    schedule: &EmissionSchedule,
    amount: u64,
    lock_duration: i64,
    now: i64,
) -> Result<()> {
    require!(amount > 0, FarmError::InvalidAmount);
    require!(
        (0..=MAX_LOCK_DURATION).contains(&lock_duration),
        FarmError::InvalidLockDuration
    );

    let mut next_pool = pool.clone();
    let mut next_position = position.clone();
    settle(pool_key, &mut next_pool, Some(&mut next_position), schedule, now)?;

    if next_position.amount == 0 {
        next_pool.total_user = next_pool
            .total_user
            .checked_add(1)
            .ok_or(FarmError::ArithmeticOverflow)?;
    }
    next_position.amount = next_position
        .amount
        .checked_add(amount)
        .ok_or(FarmError::ArithmeticOverflow)?;
    next_pool.amount = next_pool
        .amount
        .checked_add(amount)
        .ok_or(FarmError::ArithmeticOverflow)?;

    next_position.last_stake_time = now;
    next_position.lock_duration = lock_duration;
    next_position.calculate_reward_debt(&next_pool)?;

    *pool = next_pool;
    *position = next_position;
    Ok(())
}

/// Withdraw `amount` from `pool` on behalf of `position`.
pub fn unstake(
    pool_key: &Pubkey,
    pool: &mut FarmPool,
    position: &mut UserPosition,
    schedule: &EmissionSchedule,
    amount: u64,
    now: i64,
) -> Result<()> {
    require!(
        amount > 0 && amount <= position.amount,
        FarmError::InvalidAmount
    );
    require!(position.is_lock_ended(now)?, FarmError::LockNotExpired);

    let mut next_pool = pool.clone();
    let mut next_position = position.clone();
    settle(pool_key, &mut next_pool, Some(&mut next_position), schedule, now)?;

    next_position.amount = next_position
        .amount
        .checked_sub(amount)
        .ok_or(FarmError::InvalidAmount)?;
    next_pool.amount = next_pool
        .amount
        .checked_sub(amount)
        .ok_or(FarmError::ArithmeticOverflow)?;
    next_position.calculate_reward_debt(&next_pool)?;

    if next_position.amount == 0 {
        next_pool.total_user = next_pool
            .total_user
            .checked_sub(1)
            .ok_or(FarmError::ArithmeticOverflow)?;
    }

    *pool = next_pool;
    *position = next_position;
    Ok(())
}

/// Settle, apply the lock bonus, and empty the position's reward balances.
///
/// Returns the payout the caller must transfer. Fails without side effects
/// when `reward_vault_balance` cannot cover it.
pub fn harvest(
    pool_key: &Pubkey,
    pool: &mut FarmPool,
    position: &mut UserPosition,
    schedule: &EmissionSchedule,
    bonus: &LockBonusConfig,
    reward_vault_balance: u64,
    now: i64,
) -> Result<u64> {
    let mut next_pool = pool.clone();
    let mut next_position = position.clone();
    settle(pool_key, &mut next_pool, Some(&mut next_position), schedule, now)?;

    let percentage = bonus.extra_percentage(next_position.lock_duration);
    let extra = mul_div_floor(
        next_position.reward_amount,
        u128::from(percentage),
        PERCENT_DENOMINATOR,
    )?;
    next_position.extra_reward = next_position
        .extra_reward
        .checked_add(extra)
        .ok_or(FarmError::ArithmeticOverflow)?;

    let total = next_position
        .reward_amount
        .checked_add(next_position.extra_reward)
        .ok_or(FarmError::ArithmeticOverflow)?;
    let payout = to_u64(total)?;
    require!(
        payout <= reward_vault_balance,
        FarmError::InsufficientRewardFunding
    );

    next_position.reward_amount = 0;
    next_position.extra_reward = 0;

    *pool = next_pool;
    *position = next_position;
    Ok(payout)
}

/// Release an empty pool's weight from the schedule.
///
/// The staking vault must be empty too, since it is closed alongside.
pub fn close_pool(
    state: &mut GlobalState,
    pool: &FarmPool,
    staking_vault_balance: u64,
) -> Result<()> {
    require!(
        pool.is_empty() && staking_vault_balance == 0,
        FarmError::PoolNotEmpty
    );
    state.deregister_pool(pool.point)
}
