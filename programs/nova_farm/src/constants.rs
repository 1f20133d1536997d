//! Program constants for the Nova Farm program.
//!
//! This module defines the PDA seeds, fixed-point precision and the bounds
//! applied to authority-supplied configuration.

/// Seed for deriving the global state PDA
pub const STATE_SEED: &[u8] = b"state";

/// Seed for deriving the lock bonus configuration PDA
pub const LOCK_BONUS_SEED: &[u8] = b"lock_bonus";

/// Seed for deriving farm pool PDAs (one per staking mint)
pub const POOL_SEED: &[u8] = b"pool";

/// Seed for deriving user position PDAs
pub const USER_POSITION_SEED: &[u8] = b"user_position";

/// Seed for deriving a pool's staking vault PDA
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

/// Seed for deriving the global reward vault PDA
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Precision multiplier for the accumulated-reward-per-share index (10^12)
pub const PRECISION: u128 = 1_000_000_000_000;

/// Denominator for lock bonus percentages (100 = 100%)
pub const PERCENT_DENOMINATOR: u128 = 100;

/// Maximum number of lock bonus tiers stored in the config account
pub const MAX_LOCK_TIERS: usize = 10;

/// Longest lock commitment a stake may carry (4 years)
pub const MAX_LOCK_DURATION: i64 = 4 * 365 * 86_400;

/// Largest bonus a single tier may grant (1000% on top of base reward)
pub const MAX_EXTRA_PERCENTAGE: u64 = 1_000;
