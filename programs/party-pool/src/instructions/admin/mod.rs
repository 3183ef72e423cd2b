pub mod init_registry;
pub mod approve_token;

pub use init_registry::*;
pub use approve_token::*;
