//! Transaction entry form view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Kind;
use crate::tui::app::App;
use crate::tui::form::{CREDIT_OPTION, DEBIT_OPTION, SUBMIT_BUTTON, TEXT_FIELD_COUNT};
use crate::tui::keybindings::{help_line, KeyContext};
use crate::tui::theme::Theme;
use crate::tui::widgets::TextInputView;

fn radio(label: &str, checked: bool, focused: bool, theme: &Theme) -> Line<'static> {
    let mark = if checked { "x" } else { " " };
    let style = if focused {
        theme.focused()
    } else {
        theme.blurred()
    };
    Line::from(Span::styled(format!("[{}] {}", mark, label), style))
}

/// Render the form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Note
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Credit
            Constraint::Length(1), // Debit
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Submit
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Help
            Constraint::Min(0),
        ])
        .split(area);

    let theme = app.theme;
    let form = &app.form;

    frame.render_widget(
        Paragraph::new(Span::styled(" Add New Transaction ", theme.title())),
        chunks[0],
    );

    for index in 0..TEXT_FIELD_COUNT {
        let view = TextInputView::new(form.input(index), &theme)
            .focused(form.is_focused(index))
            .cursor_visible(app.cursor_visible);
        frame.render_widget(view, chunks[2 + index]);
    }

    frame.render_widget(
        Paragraph::new(radio(
            "Credit",
            form.kind() == Kind::Credit,
            form.is_focused(CREDIT_OPTION),
            &theme,
        )),
        chunks[5],
    );
    frame.render_widget(
        Paragraph::new(radio(
            "Debit",
            form.kind() == Kind::Debit,
            form.is_focused(DEBIT_OPTION),
            &theme,
        )),
        chunks[6],
    );

    let button = if form.is_focused(SUBMIT_BUTTON) {
        Line::from(Span::styled("[ Submit ]", theme.focused()))
    } else {
        Line::from(vec![
            Span::raw("[ "),
            Span::styled("Submit", theme.blurred()),
            Span::raw(" ]"),
        ])
    };
    frame.render_widget(Paragraph::new(button), chunks[8]);

    if let Some(error) = form.error_message() {
        frame.render_widget(
            Paragraph::new(Span::styled(error.to_string(), theme.error_style())),
            chunks[10],
        );
    }

    let help = if app.show_help {
        help_line(KeyContext::Form)
    } else {
        "Use - to return to transaction list".to_string()
    };
    frame.render_widget(Paragraph::new(help).style(theme.blurred()), chunks[11]);
}
