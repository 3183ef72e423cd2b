use anchor_lang::prelude::*;

#[error_code]
pub enum PartyError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Token is not whitelisted or party is unknown to this registry")]
    InvalidToken,
    #[msg("Party investment window has closed")]
    Expired,
    #[msg("Party has not expired yet")]
    NotExpired,
    #[msg("Party already claimed")]
    AlreadyClaimed,
    #[msg("Token transfer rejected")]
    TransferFailed,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
