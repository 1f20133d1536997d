use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::FarmError;

/// One lock tier: committing for at least `duration` seconds earns
/// `extra_percentage` percent on top of the base reward at harvest.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockBonusTier {
    pub duration: i64,
    pub extra_percentage: u64,
}

impl LockBonusTier {
    pub const LEN: usize = 8 + 8;
}

#[account]
#[derive(Default, Debug)]
pub struct LockBonusConfig {
    pub authority: Pubkey,
    /// Ordered by strictly increasing duration.
    pub tiers: Vec<LockBonusTier>,
    pub bump: u8,
}

impl LockBonusConfig {
    pub const LEN: usize = 8 + 32 + 4 + (LockBonusTier::LEN * MAX_LOCK_TIERS) + 1;

    /// Replace the tier table after checking ordering and bounds.
    pub fn set_tiers(&mut self, tiers: Vec<LockBonusTier>) -> Result<()> {
        require!(tiers.len() <= MAX_LOCK_TIERS, FarmError::TooManyLockTiers);

        let mut previous = 0i64;
        for tier in &tiers {
            require!(
                tier.duration > previous && tier.duration <= MAX_LOCK_DURATION,
                FarmError::InvalidLockBonusTiers
            );
            require!(
                tier.extra_percentage <= MAX_EXTRA_PERCENTAGE,
                FarmError::InvalidLockBonusTiers
            );
            previous = tier.duration;
        }

        self.tiers = tiers;
        Ok(())
    }

    /// Bonus percentage of the highest tier whose duration does not exceed
    /// `lock_duration`. Zero when no tier qualifies.
    pub fn extra_percentage(&self, lock_duration: i64) -> u64 {
        if lock_duration <= 0 {
            return 0;
        }
        self.tiers
            .iter()
            .take_while(|tier| tier.duration <= lock_duration)
            .last()
            .map(|tier| tier.extra_percentage)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const DAY: i64 = 86_400;

    fn config() -> LockBonusConfig {
        let mut config = LockBonusConfig::default();
        config
            .set_tiers(vec![
                LockBonusTier { duration: 30 * DAY, extra_percentage: 10 },
                LockBonusTier { duration: 90 * DAY, extra_percentage: 25 },
                LockBonusTier { duration: 180 * DAY, extra_percentage: 50 },
            ])
            .unwrap();
        config
    }

    #[test]
    fn test_highest_tier_not_exceeding_commitment() {
        let config = config();
        assert_eq!(config.extra_percentage(0), 0);
        assert_eq!(config.extra_percentage(29 * DAY), 0);
        assert_eq!(config.extra_percentage(30 * DAY), 10);
        assert_eq!(config.extra_percentage(100 * DAY), 25);
        assert_eq!(config.extra_percentage(365 * DAY), 50);
    }

    #[test]
    fn test_empty_table_grants_nothing() {
        assert_eq!(LockBonusConfig::default().extra_percentage(365 * DAY), 0);
    }

    #[test]
    fn test_rejects_unordered_tiers() {
        let mut config = config();
        let err = config
            .set_tiers(vec![
                LockBonusTier { duration: 90 * DAY, extra_percentage: 25 },
                LockBonusTier { duration: 30 * DAY, extra_percentage: 10 },
            ])
            .unwrap_err();
        assert_eq!(err, Error::from(FarmError::InvalidLockBonusTiers));
        // table left as it was
        assert_eq!(config.tiers.len(), 3);
    }

    #[test]
    fn test_rejects_duplicate_and_zero_durations() {
        let mut config = LockBonusConfig::default();
        assert!(config
            .set_tiers(vec![LockBonusTier { duration: 0, extra_percentage: 5 }])
            .is_err());
        assert!(config
            .set_tiers(vec![
                LockBonusTier { duration: DAY, extra_percentage: 5 },
                LockBonusTier { duration: DAY, extra_percentage: 6 },
            ])
            .is_err());
    }

    #[test]
    fn test_rejects_oversized_table() {
        let tiers = (1..=(MAX_LOCK_TIERS as i64 + 1))
            .map(|i| LockBonusTier { duration: i * DAY, extra_percentage: 1 })
            .collect();
        let err = LockBonusConfig::default().set_tiers(tiers).unwrap_err();
        assert_eq!(err, Error::from(FarmError::TooManyLockTiers));
    }
}
