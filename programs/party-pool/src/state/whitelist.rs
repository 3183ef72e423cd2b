use anchor_lang::prelude::*;

/// One approved mint. Absent entries read as "not whitelisted".
#[account]
pub struct WhitelistEntry {
    pub registry: Pubkey,
    pub mint: Pubkey,
    pub approved: bool,
    pub approved_at: i64,       // first approval
    pub bump: u8,
}

impl WhitelistEntry {
    pub const LEN: usize = 8 + 32 + 32 + 1 + 8 + 1;

    /// Marks the mint approved. Returns true only on the first approval;
    /// repeated calls leave the entry untouched.
    pub fn approve(&mut self, registry: Pubkey, mint: Pubkey, now: i64, bump: u8) -> bool {
        if self.approved {
            return false;
        }
        self.registry = registry;
        self.mint = mint;
        self.approved = true;
        self.approved_at = now;
        self.bump = bump;
        true
    }

    /// Whether `entry`, the whitelist PDA loaded for `mint`, allows parties
    /// on that mint. A never-created entry allows nothing.
    pub fn permits(entry: Option<&Self>, mint: &Pubkey) -> bool {
        entry.map_or(false, |entry| entry.approved && entry.mint == *mint)
    }
}
