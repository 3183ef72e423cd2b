use anchor_lang::prelude::*;
use crate::constants::{PARTY_PAGE_SEED, REGISTRY_SEED};
use crate::state::{PartyPage, PoolRegistry};
use crate::utils::accounts::load_optional;

#[derive(Accounts)]
pub struct PartyCount<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, PoolRegistry>,
}

#[derive(Accounts)]
#[instruction(page: u64)]
pub struct PartyList<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, PoolRegistry>,

    /// CHECK: PDA address is enforced by seeds; pages past the last party
    /// were never created.
    #[account(
        seeds = [PARTY_PAGE_SEED, registry.key().as_ref(), page.to_le_bytes().as_ref()],
        bump,
    )]
    pub party_page: UncheckedAccount<'info>,
}

pub fn party_count(ctx: Context<PartyCount>) -> Result<u64> {
    Ok(ctx.accounts.registry.party_count)
}

/// Parties on `page`, oldest first. Reading pages `0..page_count` in order
/// yields every party ever started.
pub fn get_party_list(ctx: Context<PartyList>, _page: u64) -> Result<Vec<Pubkey>> {
    let parties = load_optional::<PartyPage>(&ctx.accounts.party_page)?
        .map_or_else(Vec::new, |page| page.parties);
    Ok(parties)
}
