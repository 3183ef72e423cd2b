//! Adapter over the SPL Token program, which custodies every balance.
//!
//! Investors approve the party PDA as a delegate on their token account;
//! `pull_into_custody` spends that allowance into the party vault.
//! `push_from_custody` pays out of the vault with the party as authority.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};
use crate::errors::PartyError;

/// The fields of an SPL token account the program reasons about.
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerAccount {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub delegate: Option<Pubkey>,
    pub delegated_amount: u64,
}

impl From<&TokenAccount> for LedgerAccount {
    fn from(account: &TokenAccount) -> Self {
        Self {
            mint: account.mint,
            owner: account.owner,
            amount: account.amount,
            delegate: account.delegate.into(),
            delegated_amount: account.delegated_amount,
        }
    }
}

/// Checks that `spender` may pull `amount` of `mint` out of `source` on
/// behalf of `investor`. Mirrors what the token program enforces so a bad
/// pull fails with a typed error before any CPI is attempted.
///
/// A zero pull needs no allowance, only an account of the right mint.
pub fn ensure_pull_authorized(
    source: &LedgerAccount,
    investor: &Pubkey,
    mint: &Pubkey,
    spender: &Pubkey,
    amount: u64,
) -> Result<()> {
    require_keys_eq!(source.mint, *mint, PartyError::TransferFailed);
    require_keys_eq!(source.owner, *investor, PartyError::TransferFailed);
    if amount == 0 {
        return Ok(());
    }
    require!(source.delegate == Some(*spender), PartyError::TransferFailed);
    require!(source.delegated_amount >= amount, PartyError::TransferFailed);
    require!(source.amount >= amount, PartyError::TransferFailed);
    Ok(())
}

/// Checks that `destination` can receive a payout of `mint` for `claimant`.
pub fn ensure_push_destination(
    destination: &LedgerAccount,
    claimant: &Pubkey,
    mint: &Pubkey,
) -> Result<()> {
    require_keys_eq!(destination.mint, *mint, PartyError::TransferFailed);
    require_keys_eq!(destination.owner, *claimant, PartyError::TransferFailed);
    Ok(())
}

/// Moves `amount` from an investor account into the vault, signed by the
/// party acting as the investor's approved delegate.
pub fn pull_into_custody<'info>(
    token_program: AccountInfo<'info>,
    source: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    party: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new_with_signer(
            token_program,
            Transfer {
                from: source,
                to: vault,
                authority: party,
            },
            signer_seeds,
        ),
        amount,
    )
}

/// Pays `amount` out of the vault, signed by the party as vault authority.
pub fn push_from_custody<'info>(
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    party: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new_with_signer(
            token_program,
            Transfer {
                from: vault,
                to: destination,
                authority: party,
            },
            signer_seeds,
        ),
        amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_party_err;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn approved_source(amount: u64, allowance: u64) -> LedgerAccount {
        LedgerAccount {
            mint: key(1),
            owner: key(2),
            amount,
            delegate: Some(key(3)),
            delegated_amount: allowance,
        }
    }

    #[test]
    fn pull_within_allowance_is_accepted() {
        let source = approved_source(100, 10);
        assert!(ensure_pull_authorized(&source, &key(2), &key(1), &key(3), 10).is_ok());
    }

    #[test]
    fn pull_rejects_wrong_mint() {
        let mut source = approved_source(100, 10);
        source.mint = key(9);
        assert_party_err(
            ensure_pull_authorized(&source, &key(2), &key(1), &key(3), 10),
            PartyError::TransferFailed,
        );
    }

    #[test]
    fn pull_rejects_missing_or_foreign_delegate() {
        let mut source = approved_source(100, 10);
        source.delegate = None;
        assert_party_err(
            ensure_pull_authorized(&source, &key(2), &key(1), &key(3), 10),
            PartyError::TransferFailed,
        );
        source.delegate = Some(key(7));
        assert_party_err(
            ensure_pull_authorized(&source, &key(2), &key(1), &key(3), 10),
            PartyError::TransferFailed,
        );
    }

    #[test]
    fn pull_rejects_amounts_over_allowance_or_balance() {
        let source = approved_source(100, 10);
        assert_party_err(
            ensure_pull_authorized(&source, &key(2), &key(1), &key(3), 11),
            PartyError::TransferFailed,
        );
        let poor = approved_source(5, 10);
        assert_party_err(
            ensure_pull_authorized(&poor, &key(2), &key(1), &key(3), 10),
            PartyError::TransferFailed,
        );
    }

    #[test]
    fn zero_pull_needs_no_allowance() {
        let mut source = approved_source(0, 0);
        source.delegate = None;
        assert!(ensure_pull_authorized(&source, &key(2), &key(1), &key(3), 0).is_ok());

        source.mint = key(9);
        assert_party_err(
            ensure_pull_authorized(&source, &key(2), &key(1), &key(3), 0),
            PartyError::TransferFailed,
        );
    }

    #[test]
    fn pull_rejects_foreign_owner() {
        let source = approved_source(100, 10);
        assert_party_err(
            ensure_pull_authorized(&source, &key(8), &key(1), &key(3), 5),
            PartyError::TransferFailed,
        );
    }

    #[test]
    fn push_destination_must_match_mint_and_claimant() {
        let dest = LedgerAccount {
            mint: key(1),
            owner: key(4),
            amount: 0,
            delegate: None,
            delegated_amount: 0,
        };
        assert!(ensure_push_destination(&dest, &key(4), &key(1)).is_ok());
        assert_party_err(
            ensure_push_destination(&dest, &key(5), &key(1)),
            PartyError::TransferFailed,
        );
        assert_party_err(
            ensure_push_destination(&dest, &key(4), &key(6)),
            PartyError::TransferFailed,
        );
    }
}
