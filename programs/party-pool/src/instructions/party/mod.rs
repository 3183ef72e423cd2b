pub mod start_party;
pub mod invest;
pub mod claim;

pub use start_party::*;
pub use invest::*;
pub use claim::*;
