//! Transaction entry form
//!
//! Two text fields, a Credit/Debit selector and a submit button. A single
//! cursor walks over all five controls; which text field is focused is
//! derived from the cursor, never stored separately.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Kind, Transaction, NOTE_MAX_CHARS};
use crate::tui::widgets::TextInput;

/// Number of text fields (note, amount)
pub const TEXT_FIELD_COUNT: usize = 2;

pub const NOTE_FIELD: usize = 0;
pub const AMOUNT_FIELD: usize = 1;
pub const CREDIT_OPTION: usize = TEXT_FIELD_COUNT;
pub const DEBIT_OPTION: usize = TEXT_FIELD_COUNT + 1;
pub const SUBMIT_BUTTON: usize = TEXT_FIELD_COUNT + 2;

/// Number of cursor positions
pub const POSITION_COUNT: usize = TEXT_FIELD_COUNT + 3;

/// Maximum number of characters in the amount field
pub const AMOUNT_MAX_CHARS: usize = 32;

/// Parse the amount field into a non-negative, finite number
pub fn parse_amount(raw: &str) -> LedgerResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Validation("Enter an amount".into()));
    }

    let amount: f64 = trimmed
        .parse()
        .map_err(|_| LedgerError::Validation(format!("'{}' is not a number", trimmed)))?;

    if !amount.is_finite() {
        return Err(LedgerError::Validation("Amount must be a finite number".into()));
    }
    if amount < 0.0 {
        return Err(LedgerError::Validation("Amount cannot be negative".into()));
    }

    Ok(amount)
}

/// State for the transaction form
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    inputs: [TextInput; TEXT_FIELD_COUNT],

    /// Focused control; `None` when nothing is focused
    cursor: Option<usize>,

    /// Pending Credit/Debit selection
    kind: Kind,

    /// Validation or save error to display
    error_message: Option<String>,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    /// Create an empty form with the note field focused
    pub fn new() -> Self {
        Self {
            inputs: [
                TextInput::new()
                    .placeholder("Transaction Note")
                    .char_limit(NOTE_MAX_CHARS),
                TextInput::new()
                    .placeholder("Transaction Value")
                    .char_limit(AMOUNT_MAX_CHARS),
            ],
            cursor: Some(NOTE_FIELD),
            kind: Kind::Credit,
            error_message: None,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: Kind) {
        self.kind = kind;
    }

    /// Whether the control at `position` has focus
    pub fn is_focused(&self, position: usize) -> bool {
        self.cursor == Some(position)
    }

    /// Move to the next control, wrapping after the submit button
    pub fn next(&mut self) {
        self.cursor = Some(match self.cursor {
            Some(pos) => (pos + 1) % POSITION_COUNT,
            None => 0,
        });
    }

    /// Move to the previous control, wrapping before the note field
    pub fn prev(&mut self) {
        self.cursor = Some(match self.cursor {
            Some(pos) => (pos + POSITION_COUNT - 1) % POSITION_COUNT,
            None => SUBMIT_BUTTON,
        });
    }

    /// Drop focus from every control
    pub fn unfocus(&mut self) {
        self.cursor = None;
    }

    /// Text input at `index`
    pub fn input(&self, index: usize) -> &TextInput {
        &self.inputs[index]
    }

    /// The text field under the cursor, if the cursor is on one
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.cursor {
            Some(pos) if pos < TEXT_FIELD_COUNT => Some(&mut self.inputs[pos]),
            _ => None,
        }
    }

    pub fn note(&self) -> &str {
        self.inputs[NOTE_FIELD].value()
    }

    pub fn amount(&self) -> &str {
        self.inputs[AMOUNT_FIELD].value()
    }

    /// Clear both text fields and any message
    pub fn reset(&mut self) {
        for input in &mut self.inputs {
            input.clear();
        }
        self.error_message = None;
    }

    /// Build a transaction from the current field values
    pub fn build_transaction(&self) -> LedgerResult<Transaction> {
        let amount = parse_amount(self.amount())?;
        Ok(Transaction::new(self.note(), amount, self.kind))
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
