//! TUI Views module
//!
//! The renderer: draws the header, then either the transaction list or the
//! entry form depending on focus, then any pending notification.

pub mod form;
pub mod transaction_list;

use ratatui::{
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{App, FocusMode};
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    let header = Line::from(vec![
        Span::styled(" coin-ledger ", app.theme.title()),
        Span::styled(
            format!(" {}", app.store.path().display()),
            app.theme.blurred(),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), layout.header);

    match app.focus {
        FocusMode::List => transaction_list::render(frame, app, layout.main),
        FocusMode::Form => form::render(frame, app, layout.main),
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(40, 4, layout.main);
        frame.render_widget(NotificationWidget::new(notification, &app.theme), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ledger, Transaction};
    use crate::storage::LedgerStore;
    use crate::tui::theme::Theme;
    use crate::tui::widgets::Notification;
    use ratatui::{backend::TestBackend, Terminal};

    fn sample_app() -> App {
        let ledger = Ledger::from(vec![
            Transaction::credit("Salary", 1000.0),
            Transaction::debit("Coffee", 4.5),
        ]);
        App::new(LedgerStore::new("txns.json"), ledger, Theme::default())
    }

    fn screen_text(app: &mut App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_list_screen() {
        let mut app = sample_app();
        let screen = screen_text(&mut app, 80);

        assert!(screen.contains("txns.json"));
        assert!(screen.contains("Balance"));
        assert!(screen.contains("995.50"));
        assert!(screen.contains("in 1000.00"));
        assert!(screen.contains("out 4.50"));
        assert!(screen.contains("[Salary]"));
        assert!(screen.contains("- 4.50"));
        assert!(screen.contains("Use + to add a new transaction"));
        assert!(!screen.contains("Add New Transaction"));
    }

    #[test]
    fn test_form_screen() {
        let mut app = sample_app();
        app.focus = FocusMode::Form;
        let screen = screen_text(&mut app, 80);

        assert!(screen.contains("Add New Transaction"));
        assert!(screen.contains("Transaction Value"));
        assert!(screen.contains("[x] Credit"));
        assert!(screen.contains("[ ] Debit"));
        assert!(screen.contains("[ Submit ]"));
        assert!(!screen.contains("Balance"));
    }

    #[test]
    fn test_help_line() {
        let mut app = sample_app();
        app.show_help = true;
        let screen = screen_text(&mut app, 140);

        assert!(screen.contains("/ Filter"));
        assert!(screen.contains("q Quit"));
    }

    #[test]
    fn test_notification_toast() {
        let mut app = sample_app();
        app.notify(Notification::error("disk full"));
        let screen = screen_text(&mut app, 80);

        assert!(screen.contains("x Error"));
        assert!(screen.contains("disk full"));
    }
}
