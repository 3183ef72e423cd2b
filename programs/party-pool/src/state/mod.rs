pub mod registry;
pub mod whitelist;
pub mod party;
pub mod investment;

pub use registry::*;
pub use whitelist::*;
pub use party::*;
pub use investment::*;
