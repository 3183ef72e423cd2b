use anchor_lang::error::Error;
use crate::errors::PartyError;

/// Asserts `result` failed with exactly `expected`.
pub fn assert_party_err<T: std::fmt::Debug>(result: anchor_lang::Result<T>, expected: PartyError) {
    let name = format!("{expected:?}");
    let code: u32 = expected.into();
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number, code,
            "expected {name}, got {}",
            err.error_name
        ),
        other => panic!("expected {name}, got {other:?}"),
    }
}
