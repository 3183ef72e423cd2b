pub const REGISTRY_SEED: &[u8] = b"pool_registry";
pub const PARTY_PAGE_SEED: &[u8] = b"party_page";
pub const WHITELIST_SEED: &[u8] = b"whitelist";
pub const PARTY_SEED: &[u8] = b"party";
pub const VAULT_SEED: &[u8] = b"vault";
pub const INVESTMENT_SEED: &[u8] = b"investment";

/// How long a party accepts investments before it can be claimed.
pub const PARTY_DURATION_SECS: i64 = 7 * 24 * 60 * 60;

/// Party addresses per list page. A full page (4 + 32 * 31 bytes) still
/// fits in the 1024-byte return data of the `get_party_list` view.
pub const PARTIES_PER_PAGE: usize = 31;
