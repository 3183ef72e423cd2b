use anchor_lang::prelude::*;
use crate::constants::PARTY_DURATION_SECS;
use crate::errors::PartyError;

/// A time-boxed investment round bound to a single mint.
///
/// The open window is never stored as a flag: `phase` derives it from
/// `created_at` and the clock on every call. Only `settle` changes the
/// lifecycle, and only once.
#[account]
pub struct InvestmentParty {
    pub registry: Pubkey,
    pub party_id: u64,
    pub token: Pubkey,              // bound mint, never changes
    pub creator: Pubkey,
    pub vault: Pubkey,              // custody token account, authority = this PDA
    pub created_at: i64,
    pub total_invested: u64,
    pub settled: bool,
    pub claimant: Option<Pubkey>,
    pub claimed_amount: u64,
    pub settled_at: Option<i64>,
    pub bump: u8,
    pub vault_bump: u8,
}

impl InvestmentParty {
    // 8 (discriminator)
    // 32 (registry) + 8 (party_id) + 32 (token) + 32 (creator) + 32 (vault)
    // 8 (created_at) + 8 (total_invested) + 1 (settled)
    // 1+32 (claimant option) + 8 (claimed_amount) + 1+8 (settled_at option)
    // 1 (bump) + 1 (vault_bump)
    pub const LEN: usize = 8 + 32 + 8 + 32 * 3 + 8 + 8 + 1 + 33 + 8 + 9 + 1 + 1;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        registry: Pubkey,
        party_id: u64,
        token: Pubkey,
        creator: Pubkey,
        vault: Pubkey,
        created_at: i64,
        bump: u8,
        vault_bump: u8,
    ) -> Self {
        Self {
            registry,
            party_id,
            token,
            creator,
            vault,
            created_at,
            total_invested: 0,
            settled: false,
            claimant: None,
            claimed_amount: 0,
            settled_at: None,
            bump,
            vault_bump,
        }
    }

    pub fn expires_at(&self) -> Result<i64> {
        self.created_at
            .checked_add(PARTY_DURATION_SECS)
            .ok_or_else(|| error!(PartyError::MathOverflow))
    }

    pub fn phase(&self, now: i64) -> Result<PartyPhase> {
        if self.settled {
            return Ok(PartyPhase::Settled);
        }
        Ok(if now < self.expires_at()? {
            PartyPhase::Open
        } else {
            PartyPhase::Expired
        })
    }

    pub fn ensure_open(&self, now: i64) -> Result<()> {
        require!(self.phase(now)? == PartyPhase::Open, PartyError::Expired);
        Ok(())
    }

    pub fn ensure_claimable(&self, now: i64) -> Result<()> {
        match self.phase(now)? {
            PartyPhase::Expired => Ok(()),
            PartyPhase::Open => err!(PartyError::NotExpired),
            PartyPhase::Settled => err!(PartyError::AlreadyClaimed),
        }
    }

    /// Adds a successful investment to the running total and returns it.
    pub fn record_investment(&mut self, amount: u64) -> Result<u64> {
        self.total_invested = self
            .total_invested
            .checked_add(amount)
            .ok_or(PartyError::MathOverflow)?;
        Ok(self.total_invested)
    }

    /// Closes the party in favour of `claimant`. Fails unless the party is
    /// expired and unsettled, so a second settlement is impossible.
    pub fn settle(&mut self, claimant: Pubkey, amount: u64, now: i64) -> Result<()> {
        self.ensure_claimable(now)?;
        self.settled = true;
        self.claimant = Some(claimant);
        self.claimed_amount = amount;
        self.settled_at = Some(now);
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PartyPhase {
    Open,
    Expired,
    Settled,
}

/// Read-only snapshot returned by the `party_status` view.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Debug)]
pub struct PartyStatus {
    pub token: Pubkey,
    pub created_at: i64,
    pub expires_at: i64,
    pub phase: PartyPhase,
    pub held: u64,
    pub total_invested: u64,
    pub claimant: Option<Pubkey>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_party_err;

    const START: i64 = 1_700_000_000;

    fn party() -> InvestmentParty {
        InvestmentParty::new(
            Pubkey::new_from_array([1; 32]),
            0,
            Pubkey::new_from_array([2; 32]),
            Pubkey::new_from_array([3; 32]),
            Pubkey::new_from_array([4; 32]),
            START,
            255,
            254,
        )
    }

    #[test]
    fn phase_follows_the_clock() {
        let p = party();
        let expiry = START + PARTY_DURATION_SECS;
        assert_eq!(p.expires_at().unwrap(), expiry);
        assert_eq!(p.phase(START).unwrap(), PartyPhase::Open);
        assert_eq!(p.phase(expiry - 1).unwrap(), PartyPhase::Open);
        assert_eq!(p.phase(expiry).unwrap(), PartyPhase::Expired);
        assert_eq!(p.phase(expiry + 86_400).unwrap(), PartyPhase::Expired);
    }

    #[test]
    fn invest_window_closes_at_expiry() {
        let p = party();
        let expiry = START + PARTY_DURATION_SECS;
        assert!(p.ensure_open(expiry - 1).is_ok());
        assert_party_err(p.ensure_open(expiry), PartyError::Expired);
    }

    #[test]
    fn claim_requires_expiry() {
        let p = party();
        assert_party_err(p.ensure_claimable(START + 1), PartyError::NotExpired);
        assert!(p.ensure_claimable(START + PARTY_DURATION_SECS).is_ok());
    }

    #[test]
    fn settles_exactly_once() {
        let mut p = party();
        let after = START + PARTY_DURATION_SECS + 10;
        let winner = Pubkey::new_from_array([9; 32]);

        p.settle(winner, 30, after).unwrap();
        assert!(p.settled);
        assert_eq!(p.claimant, Some(winner));
        assert_eq!(p.claimed_amount, 30);
        assert_eq!(p.settled_at, Some(after));
        assert_eq!(p.phase(after).unwrap(), PartyPhase::Settled);

        let other = Pubkey::new_from_array([8; 32]);
        assert_party_err(p.settle(other, 0, after + 1), PartyError::AlreadyClaimed);
        assert_eq!(p.claimant, Some(winner));
        assert_eq!(p.claimed_amount, 30);
    }

    #[test]
    fn settled_party_rejects_investment() {
        let mut p = party();
        let after = START + PARTY_DURATION_SECS;
        p.settle(Pubkey::new_from_array([9; 32]), 0, after).unwrap();
        assert_party_err(p.ensure_open(START), PartyError::Expired);
    }

    #[test]
    fn settle_before_expiry_leaves_party_untouched() {
        let mut p = party();
        assert_party_err(
            p.settle(Pubkey::new_from_array([9; 32]), 10, START),
            PartyError::NotExpired,
        );
        assert!(!p.settled);
        assert_eq!(p.claimant, None);
    }

    #[test]
    fn investment_total_accumulates() {
        let mut p = party();
        assert_eq!(p.record_investment(10).unwrap(), 10);
        assert_eq!(p.record_investment(20).unwrap(), 30);
        assert_party_err(p.record_investment(u64::MAX), PartyError::MathOverflow);
        assert_eq!(p.total_invested, 30);
    }

    #[test]
    fn expiry_overflow_is_reported() {
        let mut p = party();
        p.created_at = i64::MAX;
        assert_party_err(p.expires_at(), PartyError::MathOverflow);
    }
}
