use anchor_lang::prelude::*;
use crate::constants::PARTIES_PER_PAGE;
use crate::errors::PartyError;

#[account]
pub struct PoolRegistry {
    pub owner: Pubkey,          // 32
    pub party_count: u64,       // 8, only grows
    pub bump: u8,               // 1
}

impl PoolRegistry {
    pub const LEN: usize = 8 + 32 + 8 + 1;

    pub fn is_owner(&self, caller: &Pubkey) -> bool {
        self.owner == *caller
    }

    pub fn ensure_owner(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_owner(caller), PartyError::Unauthorized);
        Ok(())
    }

    /// Id the next started party will receive.
    pub fn next_party_id(&self) -> u64 {
        self.party_count
    }

    pub fn next_party_seed(&self) -> [u8; 8] {
        self.next_party_id().to_le_bytes()
    }

    /// Page that will hold the next started party.
    pub fn next_page_seed(&self) -> [u8; 8] {
        PartyPage::page_of(self.next_party_id()).to_le_bytes()
    }

    /// Claims the next party id.
    pub fn register_party(&mut self) -> Result<u64> {
        let party_id = self.party_count;
        self.party_count = party_id.checked_add(1).ok_or(PartyError::MathOverflow)?;
        Ok(party_id)
    }

    pub fn page_count(&self) -> u64 {
        self.party_count.div_ceil(PARTIES_PER_PAGE as u64)
    }
}

/// One fixed-size slice of the append-only party list. Page `n` holds the
/// parties with ids `n * PARTIES_PER_PAGE ..` in creation order.
#[account]
pub struct PartyPage {
    pub registry: Pubkey,
    pub page: u64,
    pub parties: Vec<Pubkey>,
    pub bump: u8,
}

impl PartyPage {
    pub const LEN: usize = 8 + 32 + 8 + 4 + 32 * PARTIES_PER_PAGE + 1;

    pub fn page_of(party_id: u64) -> u64 {
        party_id / PARTIES_PER_PAGE as u64
    }

    /// Appends `party`, which must be the party with id `party_id`.
    pub fn append(&mut self, registry: Pubkey, party_id: u64, party: Pubkey, bump: u8) -> Result<()> {
        let page = Self::page_of(party_id);
        let slot = (party_id % PARTIES_PER_PAGE as u64) as usize;
        if self.parties.is_empty() {
            self.registry = registry;
            self.page = page;
            self.bump = bump;
        }
        require!(
            self.page == page && self.parties.len() == slot,
            PartyError::InvalidToken
        );
        self.parties.push(party);
        Ok(())
    }
}
