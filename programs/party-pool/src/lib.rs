use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

#[cfg(test)]
mod test_utils;

use instructions::*;
use state::PartyStatus;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod party_pool {
    use super::*;

    pub fn init_registry(ctx: Context<InitRegistry>) -> Result<()> {
        instructions::admin::init_registry::process_init_registry(ctx)
    }

    pub fn approve_token(ctx: Context<ApproveToken>) -> Result<()> {
        instructions::admin::approve_token::process_approve_token(ctx)
    }

    pub fn start_party(ctx: Context<StartParty>) -> Result<Pubkey> {
        instructions::party::start_party::process_start_party(ctx)
    }

    pub fn invest(ctx: Context<Invest>, amount: u64) -> Result<()> {
        instructions::party::invest::process_invest(ctx, amount)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::party::claim::process_claim(ctx)
    }

    pub fn token_state(ctx: Context<TokenState>) -> Result<bool> {
        instructions::views::whitelist::token_state(ctx)
    }

    pub fn party_count(ctx: Context<PartyCount>) -> Result<u64> {
        instructions::views::registry::party_count(ctx)
    }

    pub fn get_party_list(ctx: Context<PartyList>, page: u64) -> Result<Vec<Pubkey>> {
        instructions::views::registry::get_party_list(ctx, page)
    }

    pub fn investment(ctx: Context<InvestmentView>, investor: Pubkey) -> Result<u64> {
        instructions::views::party::investment(ctx, investor)
    }

    pub fn party_token(ctx: Context<PartyView>) -> Result<Pubkey> {
        instructions::views::party::party_token(ctx)
    }

    pub fn claimed_by(ctx: Context<PartyView>) -> Result<Option<Pubkey>> {
        instructions::views::party::claimed_by(ctx)
    }

    pub fn held_balance(ctx: Context<PartyCustodyView>) -> Result<u64> {
        instructions::views::party::held_balance(ctx)
    }

    pub fn party_status(ctx: Context<PartyCustodyView>) -> Result<PartyStatus> {
        instructions::views::party::party_status(ctx)
    }
}
