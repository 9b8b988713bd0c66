//! Core data models for coin-ledger
//!
//! Transactions and the ledger that owns them.

pub mod ledger;
pub mod transaction;

pub use ledger::Ledger;
pub use transaction::{Kind, Transaction, NOTE_MAX_CHARS};
