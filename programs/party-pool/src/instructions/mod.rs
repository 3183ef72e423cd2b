pub mod admin;
pub mod party;
pub mod views;

pub use admin::*;
pub use party::*;
pub use views::*;
