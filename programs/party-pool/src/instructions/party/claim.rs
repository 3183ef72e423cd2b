use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::{PARTY_SEED, REGISTRY_SEED, VAULT_SEED};
use crate::state::InvestmentParty;
use crate::events::PartyClaimed;
use crate::errors::PartyError;
use crate::utils::ledger::{self, LedgerAccount};

#[derive(Accounts)]
pub struct Claim<'info> {
    /// CHECK: only its address is used, pinned by seeds.
    #[account(
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [PARTY_SEED, registry.key().as_ref(), party.party_id.to_le_bytes().as_ref()],
        bump = party.bump,
        has_one = registry @ PartyError::InvalidToken,
    )]
    pub party: Box<Account<'info, InvestmentParty>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, party.key().as_ref()],
        bump = party.vault_bump,
        constraint = vault.key() == party.vault @ PartyError::InvalidToken,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Payout destination, validated against the party mint in the handler.
    #[account(mut)]
    pub claimant_token_account: Account<'info, TokenAccount>,

    pub claimant: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn process_claim(ctx: Context<Claim>) -> Result<()> {
    let clock = Clock::get()?;
    let party = &mut ctx.accounts.party;
    let claimant = ctx.accounts.claimant.key();

    // Guards
    party.ensure_claimable(clock.unix_timestamp)?;
    ledger::ensure_push_destination(
        &LedgerAccount::from(&*ctx.accounts.claimant_token_account),
        &claimant,
        &party.token,
    )?;

    // Winner takes the whole vault, whatever they put in
    let payout = ctx.accounts.vault.amount;

    if payout > 0 {
        let party_id_bytes = party.party_id.to_le_bytes();
        let seeds = &[
            PARTY_SEED,
            party.registry.as_ref(),
            party_id_bytes.as_ref(),
            &[party.bump],
        ];
        let signer = &[&seeds[..]];

        ledger::push_from_custody(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.claimant_token_account.to_account_info(),
            party.to_account_info(),
            signer,
            payout,
        )?;
    }

    party.settle(claimant, payout, clock.unix_timestamp)?;

    msg!("Party {} claimed by {} for {}", party.party_id, claimant, payout);

    emit!(PartyClaimed {
        party: party.key(),
        claimant,
        amount: payout,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
