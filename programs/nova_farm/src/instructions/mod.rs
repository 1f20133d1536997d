//! Instruction handlers for the Nova Farm program.
//!
//! This module contains all instruction implementations.

pub mod change_token_per_second;
pub mod close_pool;
pub mod create_pool;
pub mod create_state;
pub mod create_user;
pub mod fund_reward_token;
pub mod harvest;
pub mod pool_sync;
pub mod set_lock_bonus_tiers;
pub mod stake;
pub mod unstake;

pub use change_token_per_second::*;
pub use close_pool::*;
pub use create_pool::*;
pub use create_state::*;
pub use create_user::*;
pub use fund_reward_token::*;
pub use harvest::*;
pub use set_lock_bonus_tiers::*;
pub use stake::*;
pub use unstake::*;
