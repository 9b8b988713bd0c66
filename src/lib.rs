//! coin-ledger - Terminal credit/debit ledger with a running balance
//!
//! This library provides the core of the `coin` binary: a list of recorded
//! transactions, an entry form for new ones, and a JSON file that is
//! rewritten after every successful submission.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `logging`: File-backed tracing setup
//! - `models`: Transactions and the ledger
//! - `storage`: JSON file storage layer
//! - `tui`: Terminal user interface
//!
//! # Example
//!
//! ```rust,no_run
//! use coin_ledger::storage::LedgerStore;
//!
//! let store = LedgerStore::new("txns.json");
//! let ledger = store.load()?;
//! println!("Balance: {:.2}", ledger.balance());
//! # Ok::<(), coin_ledger::LedgerError>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
