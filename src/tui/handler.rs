//! Event handler for the TUI
//!
//! Routes keyboard events to the list or the form based on the current
//! focus. A handful of keys are global and checked first.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{error, warn};

use crate::models::Kind;

use super::app::{App, FocusMode};
use super::event::Event;
use super::form::{CREDIT_OPTION, DEBIT_OPTION, SUBMIT_BUTTON};
use super::views::transaction_list::ListAction;
use super::widgets::Notification;

/// Handle an incoming event
///
/// Nothing here is fatal: submit failures become messages on screen.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        // The next draw picks up the new size
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('+') => app.focus_form(),
        KeyCode::Char('-') => app.focus_list(),
        _ => match app.focus {
            FocusMode::List => handle_list_key(app, key),
            FocusMode::Form => handle_form_key(app, key),
        },
    }
}

/// Handle keys when the list is focused
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match app.list.handle_key(key) {
        ListAction::Quit => app.quit(),
        ListAction::ToggleHelp => app.show_help = !app.show_help,
        ListAction::None => {}
    }
}

/// Handle keys when the form is focused
fn handle_form_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Enter && app.form.is_focused(SUBMIT_BUTTON) {
        submit_form(app);
        return;
    }

    let form = &mut app.form;

    match key.code {
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev(),
        KeyCode::Tab | KeyCode::Down => form.next(),
        KeyCode::BackTab | KeyCode::Up => form.prev(),

        KeyCode::Enter => match form.cursor() {
            Some(CREDIT_OPTION) => form.set_kind(Kind::Credit),
            Some(DEBIT_OPTION) => form.set_kind(Kind::Debit),
            // On a text field (or nothing) Enter moves on like Tab
            _ => form.next(),
        },

        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input_mut() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input_mut() {
                input.delete();
            }
        }
        KeyCode::Left => {
            if let Some(input) = form.focused_input_mut() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_input_mut() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input_mut() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input_mut() {
                input.move_end();
            }
        }

        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if form.focused_input_mut().map(|input| input.insert(c)).is_some() {
                form.clear_error();
            }
        }

        _ => {}
    }
}

/// Submit the form and turn any failure into a message for the user
fn submit_form(app: &mut App) {
    match app.submit() {
        Ok(txn) => {
            app.notify(Notification::success(format!("Recorded {}", txn)));
        }
        Err(e) if e.is_validation() => {
            warn!(error = %e, "rejected form input");
            app.form.set_error(e.to_string());
        }
        Err(e) => {
            error!(error = %e, "failed to save ledger");
            app.form.set_error("Could not save the ledger; the entry was not recorded");
            app.notify(Notification::error(e.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LedgerStore;
    use crate::tui::form::{AMOUNT_FIELD, NOTE_FIELD};
    use crate::tui::theme::Theme;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, key(code));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn new_app(temp_dir: &TempDir) -> App {
        let store = LedgerStore::new(temp_dir.path().join("txns.json"));
        let ledger = store.load().unwrap();
        App::new(store, ledger, Theme::default())
    }

    #[test]
    fn test_plus_and_minus_switch_focus() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = new_app(&temp_dir);

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.focus, FocusMode::Form);
        assert_eq!(app.form.cursor(), Some(NOTE_FIELD));

        type_str(&mut app, "Draft");
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.focus, FocusMode::List);
        assert_eq!(app.form.note(), "Draft");

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.form.note(), "Draft");
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = new_app(&temp_dir);
        press(&mut app, KeyCode::Char('+'));

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
        assert_eq!(app.form.note(), "");
    }

    #[test]
    fn test_q_quits_only_from_list() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = new_app(&temp_dir);

        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.form.note(), "q");

        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation_keys_wrap() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = new_app(&temp_dir);
        press(&mut app, KeyCode::Char('+'));

        press(&mut app, KeyCode::Up);
        assert_eq!(app.form.cursor(), Some(SUBMIT_BUTTON));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.form.cursor(), Some(NOTE_FIELD));
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.form.cursor(), Some(SUBMIT_BUTTON));
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT));
        assert_eq!(app.form.cursor(), Some(DEBIT_OPTION));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.form.cursor(), Some(SUBMIT_BUTTON));
    }

    #[test]
    fn test_enter_selects_kind_without_moving() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = new_app(&temp_dir);
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.kind(), Kind::Debit);
        assert_eq!(app.form.cursor(), Some(DEBIT_OPTION));
        assert_eq!(app.focus, FocusMode::Form);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.kind(), Kind::Credit);
        assert_eq!(app.form.cursor(), Some(CREDIT_OPTION));
    }

    #[test]
    fn test_enter_on_text_field_advances() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = new_app(&temp_dir);
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.cursor(), Some(AMOUNT_FIELD));
    }

    #[test]
    fn test_typing_ignored_off_text_fields() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = new_app(&temp_dir);
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Up);
        type_str(&mut app, "abc");

        assert_eq!(app.form.note(), "");
        assert_eq!(app.form.amount(), "");
    }

    #[test]
    fn test_invalid_amount_shows_message() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = new_app(&temp_dir);
        press(&mut app, KeyCode::Char('+'));
        type_str(&mut app, "Lunch");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.form.cursor(), Some(SUBMIT_BUTTON));

        press(&mut app, KeyCode::Enter);
        assert!(app.ledger.is_empty());
        assert_eq!(app.focus, FocusMode::Form);
        assert!(app.form.error_message().unwrap().contains("not a number"));
        assert_eq!(app.form.amount(), "abc");

        // Editing clears the message
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        assert!(app.form.error_message().is_none());
    }

    #[test]
    fn test_second_entry_starts_on_note_field() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = new_app(&temp_dir);
        press(&mut app, KeyCode::Char('+'));
        type_str(&mut app, "Salary");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "100");
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.ledger.len(), 1);
        assert_eq!(app.focus, FocusMode::List);

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.form.cursor(), Some(NOTE_FIELD));
        type_str(&mut app, "Tea");
        assert_eq!(app.form.note(), "Tea");
    }

    #[test]
    fn test_list_keys_do_not_touch_form() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = new_app(&temp_dir);
        type_str(&mut app, "/tea");
        assert_eq!(app.list.filter(), "tea");
        assert_eq!(app.form.note(), "");
    }

    #[test]
    fn test_tick_event() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = new_app(&temp_dir);
        handle_event(&mut app, Event::Tick);
        assert!(!app.cursor_visible);
        handle_event(&mut app, Event::Resize(10, 10));
    }
}
