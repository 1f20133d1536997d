//! Lock bonus configuration instruction handler.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::FarmError;
use crate::state::{LockBonusConfig, LockBonusTier};

/// Accounts required for updating the lock bonus table.
#[derive(Accounts)]
pub struct SetLockBonusTiers<'info> {
    /// The program authority.
    pub authority: Signer<'info>,

    /// Lock bonus tiers.
    #[account(
        mut,
        seeds = [LOCK_BONUS_SEED],
        bump = lock_bonus.bump,
        has_one = authority @ FarmError::Unauthorized
    )]
    pub lock_bonus: Account<'info, LockBonusConfig>,
}

/// Replace the lock bonus table.
///
/// Takes effect at each position's next harvest.
pub fn handler(ctx: Context<SetLockBonusTiers>, tiers: Vec<LockBonusTier>) -> Result<()> {
    let lock_bonus = &mut ctx.accounts.lock_bonus;
    lock_bonus.set_tiers(tiers)?;

    msg!("Lock bonus tiers updated ({} tiers)", lock_bonus.tiers.len());
    for tier in &lock_bonus.tiers {
        msg!("  >= {}s: +{}%", tier.duration, tier.extra_percentage);
    }

    Ok(())
}
