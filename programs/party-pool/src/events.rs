use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct TokenApproved {
    pub registry: Pubkey,
    pub mint: Pubkey,
    pub approved_by: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PartyStarted {
    pub party: Pubkey,
    pub party_id: u64,
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub created_at: i64,
    pub expires_at: i64,
}

#[event]
pub struct InvestmentRecorded {
    pub party: Pubkey,
    pub investor: Pubkey,
    pub amount: u64,
    pub investor_total: u64,
    pub party_total: u64,
    pub timestamp: i64,
}

#[event]
pub struct PartyClaimed {
    pub party: Pubkey,
    pub claimant: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
