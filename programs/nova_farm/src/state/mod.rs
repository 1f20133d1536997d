//! State structures for the Nova Farm program.
//!
//! This module defines all account structures used to store program state.

pub mod farm_pool;
pub mod global_state;
pub mod lock_bonus;
pub mod user_position;

pub use farm_pool::*;
pub use global_state::*;
pub use lock_bonus::*;
pub use user_position::*;
