//! Transaction model
//!
//! A single credit or debit entry with a free-text note. Transactions are
//! immutable once created.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of characters in a transaction note
pub const NOTE_MAX_CHARS: usize = 64;

/// Direction of a transaction
///
/// Stored on disk as a boolean (`true` = credit, `false` = debit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "bool", into = "bool")]
pub enum Kind {
    /// Money coming in
    #[default]
    Credit,
    /// Money going out
    Debit,
}

impl Kind {
    /// Sign shown in front of the amount
    pub fn sign(&self) -> &'static str {
        match self {
            Self::Credit => "+",
            Self::Debit => "-",
        }
    }

    /// Apply this kind's sign to an amount
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            Self::Credit => amount,
            Self::Debit => -amount,
        }
    }
}

impl From<bool> for Kind {
    fn from(is_credit: bool) -> Self {
        if is_credit {
            Self::Credit
        } else {
            Self::Debit
        }
    }
}

impl From<Kind> for bool {
    fn from(kind: Kind) -> Self {
        matches!(kind, Kind::Credit)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "Credit"),
            Self::Debit => write!(f, "Debit"),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Free-text note
    #[serde(rename = "Note")]
    pub note: String,

    /// Non-negative amount
    #[serde(rename = "Value")]
    pub amount: f64,

    /// Credit or debit
    #[serde(rename = "Kind")]
    pub kind: Kind,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(note: impl Into<String>, amount: f64, kind: Kind) -> Self {
        Self {
            note: note.into(),
            amount,
            kind,
        }
    }

    /// Create a credit transaction
    pub fn credit(note: impl Into<String>, amount: f64) -> Self {
        Self::new(note, amount, Kind::Credit)
    }

    /// Create a debit transaction
    pub fn debit(note: impl Into<String>, amount: f64) -> Self {
        Self::new(note, amount, Kind::Debit)
    }

    /// Amount with the sign implied by the kind
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }

    /// First display line
    pub fn title(&self) -> String {
        format!("[{}]", self.note)
    }

    /// Second display line, rounded to cents
    ///
    /// Only the display rounds; the stored amount keeps full precision.
    pub fn description(&self) -> String {
        format!("{} {:.2}", self.kind.sign(), self.amount)
    }

    /// Text used when filtering the list
    pub fn filter_value(&self) -> &str {
        &self.note
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title(), self.description())
    }
}
