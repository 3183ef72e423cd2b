use anchor_lang::prelude::*;
use anchor_lang::Owner;

/// Deserializes a program account that may not exist yet.
///
/// Returns `None` for empty accounts and for accounts owned by another
/// program, so lookups against never-created PDAs read as defaults.
pub fn load_optional<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + Owner,
{
    if info.data_is_empty() || *info.owner != T::owner() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}
