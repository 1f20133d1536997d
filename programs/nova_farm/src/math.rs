//! Fixed-point helpers for reward accounting.
//!
//! Per-share quantities are `u128` integers scaled by [`PRECISION`]. Every
//! operation is checked: overflow is reported as
//! [`FarmError::ArithmeticOverflow`] rather than wrapped or clamped. Division
//! always floors, so the remainder stays in the reward vault.

use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::error::FarmError;

/// `a * b / c`, floored.
pub fn mul_div_floor(a: u128, b: u128, c: u128) -> Result<u128> {
    let product = a.checked_mul(b).ok_or(FarmError::ArithmeticOverflow)?;
    let quotient = product
        .checked_div(c)
        .ok_or(FarmError::ArithmeticOverflow)?;
    Ok(quotient)
}

/// `amount * acc_reward_per_share`, still scaled by [`PRECISION`].
pub fn share_checkpoint(amount: u64, acc_reward_per_share: u128) -> Result<u128> {
    let checkpoint = u128::from(amount)
        .checked_mul(acc_reward_per_share)
        .ok_or(FarmError::ArithmeticOverflow)?;
    Ok(checkpoint)
}

/// Drop the [`PRECISION`] scale, flooring.
pub fn unscale(value: u128) -> u128 {
    value / PRECISION
}

/// Narrow a reward quantity to a token amount.
pub fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(FarmError::ArithmeticOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn test_mul_div_floors() {
        assert_eq!(mul_div_floor(10, 10, 3).unwrap(), 33);
        assert_eq!(mul_div_floor(2, 1, 3).unwrap(), 0);
    }

    #[test]
    fn test_mul_div_overflow_is_error() {
        let err = mul_div_floor(u128::MAX, 2, 1).unwrap_err();
        assert_eq!(err, Error::from(FarmError::ArithmeticOverflow));
    }

    #[test]
    fn test_mul_div_by_zero_is_error() {
        let err = mul_div_floor(1, 1, 0).unwrap_err();
        assert_eq!(err, Error::from(FarmError::ArithmeticOverflow));
    }

    #[test]
    fn test_share_checkpoint_keeps_precision() {
        // 3 units at 0.5 reward per unit
        let checkpoint = share_checkpoint(3, PRECISION / 2).unwrap();
        assert_eq!(checkpoint, PRECISION * 3 / 2);
        assert_eq!(unscale(checkpoint), 1);
        // 1 unit at 0.9 reward per unit floors to zero
        assert_eq!(unscale(share_checkpoint(1, PRECISION * 9 / 10).unwrap()), 0);
    }

    #[test]
    fn test_share_checkpoint_overflow_is_error() {
        let err = share_checkpoint(u64::MAX, u128::MAX / 2).unwrap_err();
        assert_eq!(err, Error::from(FarmError::ArithmeticOverflow));
    }

    #[test]
    fn test_to_u64() {
        assert_eq!(to_u64(42).unwrap(), 42);
        assert!(to_u64(u128::from(u64::MAX) + 1).is_err());
    }
}
