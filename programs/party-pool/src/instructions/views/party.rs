use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;
use crate::constants::{INVESTMENT_SEED, PARTY_SEED, REGISTRY_SEED, VAULT_SEED};
use crate::state::{Investment, InvestmentParty, PartyStatus};
use crate::errors::PartyError;
use crate::utils::accounts::load_optional;

#[derive(Accounts)]
pub struct PartyView<'info> {
    /// CHECK: only its address is used, pinned by seeds.
    #[account(seeds = [REGISTRY_SEED], bump)]
    pub registry: UncheckedAccount<'info>,

    #[account(
        seeds = [PARTY_SEED, registry.key().as_ref(), party.party_id.to_le_bytes().as_ref()],
        bump = party.bump,
        has_one = registry @ PartyError::InvalidToken,
    )]
    pub party: Account<'info, InvestmentParty>,
}

#[derive(Accounts)]
pub struct PartyCustodyView<'info> {
    /// CHECK: only its address is used, pinned by seeds.
    #[account(seeds = [REGISTRY_SEED], bump)]
    pub registry: UncheckedAccount<'info>,

    #[account(
        seeds = [PARTY_SEED, registry.key().as_ref(), party.party_id.to_le_bytes().as_ref()],
        bump = party.bump,
        has_one = registry @ PartyError::InvalidToken,
    )]
    pub party: Account<'info, InvestmentParty>,

    #[account(
        seeds = [VAULT_SEED, party.key().as_ref()],
        bump = party.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[derive(Accounts)]
#[instruction(investor: Pubkey)]
pub struct InvestmentView<'info> {
    /// CHECK: only its address is used, pinned by seeds.
    #[account(seeds = [REGISTRY_SEED], bump)]
    pub registry: UncheckedAccount<'info>,

    #[account(
        seeds = [PARTY_SEED, registry.key().as_ref(), party.party_id.to_le_bytes().as_ref()],
        bump = party.bump,
        has_one = registry @ PartyError::InvalidToken,
    )]
    pub party: Account<'info, InvestmentParty>,

    /// CHECK: PDA address is enforced by seeds; absent for non-investors.
    #[account(
        seeds = [INVESTMENT_SEED, party.key().as_ref(), investor.as_ref()],
        bump,
    )]
    pub investment: UncheckedAccount<'info>,
}

pub fn party_token(ctx: Context<PartyView>) -> Result<Pubkey> {
    Ok(ctx.accounts.party.token)
}

pub fn claimed_by(ctx: Context<PartyView>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.party.claimant)
}

/// Cumulative amount `investor` put into the party; zero if they never did.
pub fn investment(ctx: Context<InvestmentView>, _investor: Pubkey) -> Result<u64> {
    let amount = load_optional::<Investment>(&ctx.accounts.investment)?
        .map_or(0, |record| record.amount);
    Ok(amount)
}

pub fn held_balance(ctx: Context<PartyCustodyView>) -> Result<u64> {
    Ok(ctx.accounts.vault.amount)
}

pub fn party_status(ctx: Context<PartyCustodyView>) -> Result<PartyStatus> {
    let now = Clock::get()?.unix_timestamp;
    let party = &ctx.accounts.party;
    Ok(PartyStatus {
        token: party.token,
        created_at: party.created_at,
        expires_at: party.expires_at()?,
        phase: party.phase(now)?,
        held: ctx.accounts.vault.amount,
        total_invested: party.total_invested,
        claimant: party.claimant,
    })
}
