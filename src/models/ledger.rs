//! Ledger model
//!
//! The ordered, append-only sequence of transactions for one ledger file.

use serde::{Deserialize, Serialize};

use super::transaction::{Kind, Transaction};

/// Ordered list of all recorded transactions
///
/// Insertion order is display order. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction at the end
    pub fn push(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// Remove and return the most recent transaction
    pub(crate) fn pop(&mut self) -> Option<Transaction> {
        self.transactions.pop()
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of credits minus sum of debits, recomputed on every call
    pub fn balance(&self) -> f64 {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    /// Total of all transactions of the given kind
    pub fn total(&self, kind: Kind) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }
}

impl From<Vec<Transaction>> for Ledger {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}
