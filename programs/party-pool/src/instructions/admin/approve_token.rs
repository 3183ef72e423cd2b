use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::constants::{REGISTRY_SEED, WHITELIST_SEED};
use crate::state::{PoolRegistry, WhitelistEntry};
use crate::events::TokenApproved;

#[derive(Accounts)]
pub struct ApproveToken<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, PoolRegistry>,

    // init_if_needed keeps repeated approvals idempotent
    #[account(
        init_if_needed,
        seeds = [WHITELIST_SEED, registry.key().as_ref(), mint.key().as_ref()],
        bump,
        payer = owner,
        space = WhitelistEntry::LEN
    )]
    pub whitelist_entry: Account<'info, WhitelistEntry>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_approve_token(ctx: Context<ApproveToken>) -> Result<()> {
    ctx.accounts.registry.ensure_owner(&ctx.accounts.owner.key())?;

    let clock = Clock::get()?;
    let registry = ctx.accounts.registry.key();
    let mint = ctx.accounts.mint.key();

    let newly_approved = ctx.accounts.whitelist_entry.approve(
        registry,
        mint,
        clock.unix_timestamp,
        ctx.bumps.whitelist_entry,
    );

    if newly_approved {
        msg!("Token {} whitelisted", mint);
    } else {
        msg!("Token {} already whitelisted", mint);
    }

    emit!(TokenApproved {
        registry,
        mint,
        approved_by: ctx.accounts.owner.key(),
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
