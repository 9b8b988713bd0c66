//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events,
//! and owns the ledger for the lifetime of the session.

use tracing::{debug, info};

use crate::error::LedgerResult;
use crate::models::{Ledger, Transaction};
use crate::storage::LedgerStore;

use super::form::TransactionFormState;
use super::theme::Theme;
use super::views::transaction_list::TransactionListState;
use super::widgets::{Notification, NotificationQueue};

/// Which view receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusMode {
    #[default]
    List,
    Form,
}

/// Main application state
pub struct App {
    /// Where the ledger is persisted
    pub store: LedgerStore,

    /// Every recorded transaction
    pub ledger: Ledger,

    /// Which view is focused
    pub focus: FocusMode,

    /// Transaction list state
    pub list: TransactionListState,

    /// Entry form state
    pub form: TransactionFormState,

    /// Colors used by the renderer
    pub theme: Theme,

    /// Pending toasts
    pub notifications: NotificationQueue,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Show the full key list instead of the short hint
    pub show_help: bool,

    /// Blink phase of the text cursor
    pub cursor_visible: bool,
}

impl App {
    /// Create a new App over an already loaded ledger
    pub fn new(store: LedgerStore, ledger: Ledger, theme: Theme) -> Self {
        let mut list = TransactionListState::new();
        list.set_items(ledger.transactions());

        Self {
            store,
            ledger,
            focus: FocusMode::default(),
            list,
            form: TransactionFormState::new(),
            theme,
            notifications: NotificationQueue::new(),
            should_quit: false,
            show_help: false,
            cursor_visible: true,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Give focus to the entry form; the form cursor is left as it was
    pub fn focus_form(&mut self) {
        if self.focus != FocusMode::Form {
            debug!("focus -> form");
        }
        self.focus = FocusMode::Form;
    }

    /// Give focus to the list; unsaved form text is kept
    pub fn focus_list(&mut self) {
        if self.focus != FocusMode::List {
            debug!("focus -> list");
        }
        self.focus = FocusMode::List;
    }

    /// Current balance over the whole ledger
    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Periodic update: blink the cursor and drop old toasts
    pub fn tick(&mut self) {
        self.cursor_visible = !self.cursor_visible;
        self.notifications.remove_expired();
    }

    /// Record the form's transaction and persist the ledger
    ///
    /// On a validation error nothing changes. On a write error the append is
    /// undone so the in-memory ledger matches the file. Only after the write
    /// succeeds are the list refreshed, the form cleared with its cursor back
    /// on the note field, and focus returned to the list.
    pub fn submit(&mut self) -> LedgerResult<Transaction> {
        let txn = self.form.build_transaction()?;

        self.ledger.push(txn.clone());
        if let Err(e) = self.store.save(&self.ledger) {
            self.ledger.pop();
            return Err(e);
        }

        info!(
            kind = %txn.kind,
            amount = txn.amount,
            total = self.ledger.len(),
            "transaction recorded"
        );

        self.list.set_items(self.ledger.transactions());
        self.form.reset();
        // Step off the submit button and on to the note field, so the next
        // `+` lands ready for typing
        self.form.unfocus();
        self.form.next();
        self.focus = FocusMode::List;

        Ok(txn)
    }
}
