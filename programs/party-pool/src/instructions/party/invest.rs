use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::{INVESTMENT_SEED, PARTY_SEED, REGISTRY_SEED, VAULT_SEED};
use crate::state::{Investment, InvestmentParty};
use crate::events::InvestmentRecorded;
use crate::errors::PartyError;
use crate::utils::ledger::{self, LedgerAccount};

#[derive(Accounts)]
pub struct Invest<'info> {
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

    #[account(
        init_if_needed,
        seeds = [INVESTMENT_SEED, party.key().as_ref(), investor.key().as_ref()],
        bump,
        payer = investor,
        space = Investment::LEN
    )]
    pub investment: Account<'info, Investment>,

    /// Investor's token account; the party must be its approved delegate.
    /// Mint and allowance are validated in the handler.
    #[account(mut)]
    pub investor_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub investor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_invest(ctx: Context<Invest>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let party = &mut ctx.accounts.party;
    let party_key = party.key();
    let investor = ctx.accounts.investor.key();

    // 1. Guards, all before any transfer
    party.ensure_open(clock.unix_timestamp)?;
    ledger::ensure_pull_authorized(
        &LedgerAccount::from(&*ctx.accounts.investor_token_account),
        &investor,
        &party.token,
        &party_key,
        amount,
    )?;

    // 2. Pull into custody, party signs as delegate
    if amount > 0 {
        let party_id_bytes = party.party_id.to_le_bytes();
        let seeds = &[
            PARTY_SEED,
            party.registry.as_ref(),
            party_id_bytes.as_ref(),
            &[party.bump],
        ];
        let signer = &[&seeds[..]];

        ledger::pull_into_custody(
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.investor_token_account.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            party.to_account_info(),
            signer,
            amount,
        )?;
    }

    // 3. Bookkeeping
    let party_total = party.record_investment(amount)?;

    let record = &mut ctx.accounts.investment;
    record.party = party_key;
    record.investor = investor;
    record.bump = ctx.bumps.investment;
    let investor_total = record.accumulate(amount, clock.unix_timestamp)?;

    emit!(InvestmentRecorded {
        party: party_key,
        investor,
        amount,
        investor_total,
        party_total,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
