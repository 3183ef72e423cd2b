pub mod accounts;
pub mod ledger;
