//! Storage layer for coin-ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json_required, write_json_atomic};
pub use ledger::LedgerStore;
