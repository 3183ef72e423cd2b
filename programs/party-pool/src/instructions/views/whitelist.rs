use anchor_lang::prelude::*;
use crate::constants::{REGISTRY_SEED, WHITELIST_SEED};
use crate::state::{PoolRegistry, WhitelistEntry};
use crate::utils::accounts::load_optional;

#[derive(Accounts)]
pub struct TokenState<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, PoolRegistry>,

    /// CHECK: PDA address is enforced by seeds; may not exist yet.
    #[account(
        seeds = [WHITELIST_SEED, registry.key().as_ref(), mint.key().as_ref()],
        bump,
    )]
    pub whitelist_entry: UncheckedAccount<'info>,

    /// CHECK: only the address is read. Any key may be queried, including
    /// ones that are not mints; those read as not whitelisted.
    pub mint: UncheckedAccount<'info>,
}

pub fn token_state(ctx: Context<TokenState>) -> Result<bool> {
    let entry = load_optional::<WhitelistEntry>(&ctx.accounts.whitelist_entry)?;
    Ok(WhitelistEntry::permits(entry.as_ref(), &ctx.accounts.mint.key()))
}
