//! Settlement of every live pool ahead of a schedule change.
//!
//! Changing `token_per_second` or `total_point` re-rates every pool, so each
//! one must first be rolled forward under the old schedule. Callers pass all
//! live pools as writable remaining accounts.

use anchor_lang::prelude::*;

use crate::error::FarmError;
use crate::settlement;
use crate::state::{EmissionSchedule, FarmPool};

/// Settle each pool in `accounts` up to `now`.
///
/// `expected` is the number of live pools the caller must cover; `exclude`
/// names a pool handled by the instruction itself and not repeated here.
pub fn settle_live_pools(
    accounts: &[AccountInfo],
    schedule: &EmissionSchedule,
    now: i64,
    expected: u64,
    exclude: Option<&Pubkey>,
) -> Result<()> {
    require!(
        accounts.len() as u64 == expected,
        FarmError::PoolAccountsMismatch
    );

    let mut seen: Vec<Pubkey> = Vec::with_capacity(accounts.len());
    for info in accounts {
        require!(!seen.contains(info.key), FarmError::DuplicatePoolAccount);
        if let Some(excluded) = exclude {
            require!(info.key != excluded, FarmError::DuplicatePoolAccount);
        }
        require_keys_eq!(*info.owner, crate::ID, FarmError::PoolAccountsMismatch);
        require!(info.is_writable, FarmError::PoolAccountsMismatch);

        let mut data = info.try_borrow_mut_data()?;
        let mut pool = FarmPool::try_deserialize(&mut &data[..])?;
        settlement::settle(info.key, &mut pool, None, schedule, now)?;

        let mut writer: &mut [u8] = &mut data[..];
        pool.try_serialize(&mut writer)?;

        seen.push(*info.key);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use crate::constants::PRECISION;

    const T0: i64 = 1_700_000_000;

    struct PoolAccount {
        key: Pubkey,
        owner: Pubkey,
        lamports: u64,
        data: Vec<u8>,
    }

    impl PoolAccount {
        fn new(pool: &FarmPool) -> Self {
            let mut data = Vec::with_capacity(FarmPool::LEN);
            pool.try_serialize(&mut data).unwrap();
            Self {
                key: Pubkey::new_unique(),
                owner: crate::ID,
                lamports: 1,
                data,
            }
        }

        fn info(&mut self, writable: bool) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                false,
                writable,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                false,
                0,
            )
        }

        fn pool(&self) -> FarmPool {
            FarmPool::try_deserialize(&mut &self.data[..]).unwrap()
        }
    }

    fn staked_pool(point: u64, amount: u64) -> FarmPool {
        FarmPool {
            point,
            amount,
            amount_multiplier: 1,
            last_reward_time: T0,
            ..FarmPool::default()
        }
    }

    fn schedule() -> EmissionSchedule {
        EmissionSchedule {
            token_per_second: 10,
            total_point: 2,
        }
    }

    #[test]
    fn test_settled_pools_are_written_back() {
        let mut a = PoolAccount::new(&staked_pool(1, 5));
        let mut b = PoolAccount::new(&staked_pool(1, 0));
        {
            let infos = vec![a.info(true), b.info(true)];
            settle_live_pools(&infos, &schedule(), T0 + 10, 2, None).unwrap();
        }

        // 100 emitted, half to each pool; 50 over 5 units
        let a = a.pool();
        assert_eq!(a.acc_reward_per_share, 10 * PRECISION);
        assert_eq!(a.last_reward_time, T0 + 10);

        // empty pool forfeits its share but its clock still moves
        let b = b.pool();
        assert_eq!(b.acc_reward_per_share, 0);
        assert_eq!(b.last_reward_time, T0 + 10);
    }

    #[test]
    fn test_missing_pool_is_rejected() {
        let mut a = PoolAccount::new(&staked_pool(1, 5));
        let infos = vec![a.info(true)];

        let err = settle_live_pools(&infos, &schedule(), T0 + 10, 2, None).unwrap_err();
        assert_eq!(err, Error::from(FarmError::PoolAccountsMismatch));
    }

    #[test]
    fn test_duplicate_pool_is_rejected() {
        let mut a = PoolAccount::new(&staked_pool(1, 5));
        let mut b = PoolAccount::new(&staked_pool(1, 5));
        b.key = a.key;
        let infos = vec![a.info(true), b.info(true)];

        let err = settle_live_pools(&infos, &schedule(), T0 + 10, 2, None).unwrap_err();
        assert_eq!(err, Error::from(FarmError::DuplicatePoolAccount));
    }

    #[test]
    fn test_excluded_pool_is_rejected() {
        let mut a = PoolAccount::new(&staked_pool(1, 5));
        let closing = a.key;
        let infos = vec![a.info(true)];

        let err = settle_live_pools(&infos, &schedule(), T0 + 10, 1, Some(&closing)).unwrap_err();
        assert_eq!(err, Error::from(FarmError::DuplicatePoolAccount));
    }

    #[test]
    fn test_foreign_or_readonly_pool_is_rejected() {
        let mut foreign = PoolAccount::new(&staked_pool(1, 5));
        foreign.owner = Pubkey::new_unique();
        {
            let infos = vec![foreign.info(true)];
            let err = settle_live_pools(&infos, &schedule(), T0 + 10, 1, None).unwrap_err();
            assert_eq!(err, Error::from(FarmError::PoolAccountsMismatch));
        }

        let mut readonly = PoolAccount::new(&staked_pool(1, 5));
        {
            let infos = vec![readonly.info(false)];
            let err = settle_live_pools(&infos, &schedule(), T0 + 10, 1, None).unwrap_err();
            assert_eq!(err, Error::from(FarmError::PoolAccountsMismatch));
        }
        assert_eq!(readonly.pool().last_reward_time, T0);
    }
}
