//! Ledger file store
//!
//! Loads and saves the full transaction sequence to a single JSON file.
//! The whole file is rewritten on every save.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::LedgerError;
use crate::models::Ledger;

use super::file_io::{read_json_required, write_json_atomic};

/// Durable home of one ledger
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger, creating an empty file if none exists
    ///
    /// Malformed content is an error; nothing is discarded silently.
    pub fn load(&self) -> Result<Ledger, LedgerError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "ledger file missing, creating empty ledger");
            let ledger = Ledger::new();
            self.save(&ledger)?;
            return Ok(ledger);
        }

        let ledger: Ledger = read_json_required(&self.path)?;
        info!(
            path = %self.path.display(),
            transactions = ledger.len(),
            "loaded ledger"
        );
        Ok(ledger)
    }

    /// Overwrite the file with the entire ledger
    pub fn save(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, ledger)?;
        debug!(
            path = %self.path.display(),
            transactions = ledger.len(),
            "saved ledger"
        );
        Ok(())
    }
}
