use anchor_lang::prelude::*;
use crate::errors::PartyError;

/// Cumulative contribution of one investor to one party.
#[account]
pub struct Investment {
    pub party: Pubkey,
    pub investor: Pubkey,
    pub amount: u64,
    pub last_invested_at: i64,
    pub bump: u8,
}

impl Investment {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 1;

    /// Adds `amount` to the investor's total and returns the new total.
    pub fn accumulate(&mut self, amount: u64, now: i64) -> Result<u64> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(PartyError::MathOverflow)?;
        self.last_invested_at = now;
        Ok(self.amount)
    }
}
