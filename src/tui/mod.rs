//! Terminal User Interface module
//!
//! The interactive ledger: a transaction list and an entry form sharing one
//! screen, drawn with ratatui.

pub mod app;
pub mod event;
pub mod form;
pub mod handler;
pub mod keybindings;
pub mod layout;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

pub use app::{App, FocusMode};
pub use terminal::run_tui;
pub use theme::Theme;
