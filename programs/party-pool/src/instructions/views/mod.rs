pub mod whitelist;
pub mod registry;
pub mod party;

pub use whitelist::*;
pub use registry::*;
pub use party::*;
