use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{PARTY_PAGE_SEED, PARTY_SEED, REGISTRY_SEED, VAULT_SEED, WHITELIST_SEED};
use crate::state::{InvestmentParty, PartyPage, PoolRegistry, WhitelistEntry};
use crate::events::PartyStarted;
use crate::errors::PartyError;
use crate::utils::accounts::load_optional;

#[derive(Accounts)]
pub struct StartParty<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, PoolRegistry>,

    // Page that receives this party; opened by the first party landing on it
    #[account(
        init_if_needed,
        seeds = [PARTY_PAGE_SEED, registry.key().as_ref(), registry.next_page_seed().as_ref()],
        bump,
        payer = creator,
        space = PartyPage::LEN
    )]
    pub party_page: Account<'info, PartyPage>,

    /// CHECK: PDA address is enforced by seeds; contents are loaded in the
    /// handler so a mint that was never approved reads as not whitelisted.
    #[account(
        seeds = [WHITELIST_SEED, registry.key().as_ref(), mint.key().as_ref()],
        bump,
    )]
    pub whitelist_entry: UncheckedAccount<'info>,

    #[account(
        init,
        seeds = [PARTY_SEED, registry.key().as_ref(), registry.next_party_seed().as_ref()],
        bump,
        payer = creator,
        space = InvestmentParty::LEN
    )]
    pub party: Account<'info, InvestmentParty>,

    #[account(
        init,
        seeds = [VAULT_SEED, party.key().as_ref()],
        bump,
        payer = creator,
        token::mint = mint,
        token::authority = party,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn process_start_party(ctx: Context<StartParty>) -> Result<Pubkey> {
    let mint = ctx.accounts.mint.key();
    let entry = load_optional::<WhitelistEntry>(&ctx.accounts.whitelist_entry)?;
    require!(
        WhitelistEntry::permits(entry.as_ref(), &mint),
        PartyError::InvalidToken
    );

    let clock = Clock::get()?;
    let registry = &mut ctx.accounts.registry;
    let registry_key = registry.key();
    let party_key = ctx.accounts.party.key();
    let party_id = registry.register_party()?;

    ctx.accounts
        .party_page
        .append(registry_key, party_id, party_key, ctx.bumps.party_page)?;

    let party = InvestmentParty::new(
        registry_key,
        party_id,
        mint,
        ctx.accounts.creator.key(),
        ctx.accounts.vault.key(),
        clock.unix_timestamp,
        ctx.bumps.party,
        ctx.bumps.vault,
    );
    let expires_at = party.expires_at()?;
    ctx.accounts.party.set_inner(party);

    msg!("Party {} opened for {} until {}", party_id, mint, expires_at);

    emit!(PartyStarted {
        party: party_key,
        party_id,
        mint,
        creator: ctx.accounts.creator.key(),
        created_at: clock.unix_timestamp,
        expires_at,
    });

    Ok(party_key)
}
