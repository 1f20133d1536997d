//! Error types for the Nova Farm program.
//!
//! Every instruction either commits its full state transition or fails with
//! one of these codes, leaving all accounts unchanged.
//!
//! ## Error Code Ranges
//! - 6000-6009: Input validation errors
//! - 6010-6019: State/lifecycle errors
//! - 6020-6029: Time/lock errors
//! - 6030-6039: Math/overflow errors
//! - 6040-6049: Authorization errors
//! - 6050-6059: Account validation errors

use anchor_lang::prelude::*;

/// Custom error codes for the Nova Farm program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum FarmError {
    // ========== Input Validation Errors (6000-6009) ==========

    /// [6000] Zero amount, or an amount exceeding the available balance.
    #[msg("Amount must be greater than zero and within the available balance")]
    InvalidAmount,

    /// [6001] Pool weight must be greater than zero.
    #[msg("Pool point must be greater than zero")]
    InvalidPoint,

    /// [6002] Amount multiplier must be at least one.
    #[msg("Amount multiplier must be at least 1")]
    InvalidAmountMultiplier,

    /// [6003] Lock duration is negative or exceeds the maximum.
    #[msg("Invalid lock duration")]
    InvalidLockDuration,

    /// [6004] Lock bonus tiers are not strictly increasing, or a tier is out of range.
    #[msg("Lock bonus tiers must have strictly increasing positive durations")]
    InvalidLockBonusTiers,

    /// [6005] More lock bonus tiers than the config account can hold.
    #[msg("Too many lock bonus tiers")]
    TooManyLockTiers,

    // ========== State/Lifecycle Errors (6010-6019) ==========

    /// [6010] The reward vault cannot cover the harvest payout.
    #[msg("Insufficient reward funding for harvest payout")]
    InsufficientRewardFunding,

    /// [6011] Pool still holds stake or active positions.
    #[msg("Pool is not empty - cannot close")]
    PoolNotEmpty,

    /// [6012] Record has already been initialized.
    #[msg("Account already initialized")]
    AlreadyInitialized,

    /// [6013] Record, or the emission schedule it depends on, is not initialized.
    #[msg("Account not initialized")]
    NotInitialized,

    // ========== Time/Lock Errors (6020-6029) ==========

    /// [6020] Unstake attempted before the lock commitment elapsed.
    #[msg("Lock period has not ended - cannot unstake yet")]
    LockNotExpired,

    // ========== Math/Overflow Errors (6030-6039) ==========

    /// [6030] Fixed-width arithmetic would overflow, underflow or divide by zero.
    #[msg("Arithmetic overflow occurred during calculation")]
    ArithmeticOverflow,

    // ========== Authorization Errors (6040-6049) ==========

    /// [6040] Signer is not the required authority.
    #[msg("Unauthorized: signer is not the required authority")]
    Unauthorized,

    // ========== Account Validation Errors (6050-6059) ==========

    /// [6050] User position does not belong to this pool.
    #[msg("User position does not belong to this pool")]
    PoolMismatch,

    /// [6051] Remaining accounts do not cover every live pool.
    #[msg("Every live pool must be supplied for settlement")]
    PoolAccountsMismatch,

    /// [6052] The same pool was supplied twice for settlement.
    #[msg("Duplicate pool account supplied")]
    DuplicatePoolAccount,

    /// [6053] Token account mint does not match the expected mint.
    #[msg("Token mint mismatch")]
    MintMismatch,

    /// [6054] Vault does not match the vault recorded on the pool or state.
    #[msg("Vault address mismatch")]
    VaultMismatch,
}
