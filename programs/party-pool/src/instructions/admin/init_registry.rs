use anchor_lang::prelude::*;
use crate::constants::REGISTRY_SEED;
use crate::state::PoolRegistry;
use crate::events::RegistryInitialized;

#[derive(Accounts)]
pub struct InitRegistry<'info> {
    #[account(
        init,
        seeds = [REGISTRY_SEED],
        bump,
        payer = owner,
        space = PoolRegistry::LEN
    )]
    pub registry: Account<'info, PoolRegistry>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_init_registry(ctx: Context<InitRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.owner = ctx.accounts.owner.key();
    registry.party_count = 0;
    registry.bump = ctx.bumps.registry;

    emit!(RegistryInitialized {
        registry: registry.key(),
        owner: registry.owner,
    });

    Ok(())
}
