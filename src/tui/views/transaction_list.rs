//! Transaction list view
//!
//! A scrollable, filterable projection of the ledger with the running
//! balance on top. The view only ever holds a snapshot; the app replaces it
//! after each change.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{Kind, Transaction};
use crate::tui::app::App;
use crate::tui::keybindings::{help_line, KeyContext};

/// Rows used by one rendered entry (title + amount)
const ITEM_HEIGHT: u16 = 2;

/// Filter input state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// No filter
    #[default]
    Off,
    /// Keystrokes edit the filter text
    Typing,
    /// Filter text is fixed and applied
    Applied,
}

/// What the list asks of the app after handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    None,
    Quit,
    ToggleHelp,
}

/// State of the transaction list
#[derive(Debug, Default)]
pub struct TransactionListState {
    /// Snapshot of the ledger
    items: Vec<Transaction>,
    /// Indices into `items` that pass the filter
    visible: Vec<usize>,
    filter: String,
    filter_mode: FilterMode,
    /// Selection and scroll offset, indexed over `visible`
    state: ListState,
    /// Entries per page, from the last rendered height
    page_size: usize,
}

impl TransactionListState {
    pub fn new() -> Self {
        Self {
            page_size: 1,
            ..Self::default()
        }
    }

    /// Replace the displayed items, keeping the selection where possible
    pub fn set_items(&mut self, items: &[Transaction]) {
        self.items = items.to_vec();
        self.refilter();
    }

    /// All items in the snapshot
    pub fn items(&self) -> &[Transaction] {
        &self.items
    }

    /// Items passing the filter, in ledger order
    pub fn visible_items(&self) -> impl Iterator<Item = &Transaction> {
        self.visible.iter().map(|&i| &self.items[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Position of the selection among the visible items
    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Currently highlighted transaction
    pub fn selected(&self) -> Option<&Transaction> {
        self.state
            .selected()
            .and_then(|i| self.visible.get(i))
            .map(|&i| &self.items[i])
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }

    /// Record the height available for entries
    pub fn set_viewport_height(&mut self, height: u16) {
        self.page_size = usize::from((height / ITEM_HEIGHT).max(1));
    }

    fn refilter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, t)| needle.is_empty() || t.filter_value().to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.visible.is_empty() {
            self.state.select(None);
        } else {
            let last = self.visible.len() - 1;
            let selected = self.state.selected().unwrap_or(0).min(last);
            self.state.select(Some(selected));
        }
    }

    fn select(&mut self, index: usize) {
        if !self.visible.is_empty() {
            self.state.select(Some(index.min(self.visible.len() - 1)));
        }
    }

    pub fn move_up(&mut self) {
        let current = self.state.selected().unwrap_or(0);
        self.select(current.saturating_sub(1));
    }

    pub fn move_down(&mut self) {
        let next = self.state.selected().map_or(0, |i| i + 1);
        self.select(next);
    }

    pub fn page_up(&mut self) {
        let current = self.state.selected().unwrap_or(0);
        self.select(current.saturating_sub(self.page_size));
    }

    pub fn page_down(&mut self) {
        let current = self.state.selected().unwrap_or(0);
        self.select(current + self.page_size);
    }

    pub fn go_to_start(&mut self) {
        self.select(0);
    }

    pub fn go_to_end(&mut self) {
        self.select(self.visible.len().saturating_sub(1));
    }

    /// Begin typing a new filter
    pub fn start_filter(&mut self) {
        self.filter.clear();
        self.filter_mode = FilterMode::Typing;
        self.refilter();
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.refilter();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        self.refilter();
    }

    /// Stop typing and keep the filter
    pub fn apply_filter(&mut self) {
        self.filter_mode = if self.filter.is_empty() {
            FilterMode::Off
        } else {
            FilterMode::Applied
        };
    }

    /// Remove the filter entirely
    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.filter_mode = FilterMode::Off;
        self.refilter();
    }

    /// Handle a key while the list has focus
    pub fn handle_key(&mut self, key: KeyEvent) -> ListAction {
        if self.filter_mode == FilterMode::Typing {
            return self.handle_filter_key(key);
        }

        match key.code {
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::PageUp | KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('b') => {
                self.page_up()
            }
            KeyCode::PageDown | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('f') => {
                self.page_down()
            }
            KeyCode::Home | KeyCode::Char('g') => self.go_to_start(),
            KeyCode::End | KeyCode::Char('G') => self.go_to_end(),
            KeyCode::Char('/') => self.start_filter(),
            KeyCode::Esc => self.clear_filter(),
            KeyCode::Char('?') => return ListAction::ToggleHelp,
            KeyCode::Char('q') => return ListAction::Quit,
            _ => {}
        }

        ListAction::None
    }

    fn handle_filter_key(&mut self, key: KeyEvent) -> ListAction {
        match key.code {
            KeyCode::Enter => self.apply_filter(),
            KeyCode::Esc => self.clear_filter(),
            KeyCode::Backspace => self.pop_filter_char(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.push_filter_char(c)
            }
            _ => {}
        }

        ListAction::None
    }
}

/// Render the balance, the list and its help line
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let filter_height = if app.list.filter_mode() == FilterMode::Off {
        0
    } else {
        1
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Balance
            Constraint::Length(1),             // Spacer
            Constraint::Length(filter_height), // Filter
            Constraint::Min(ITEM_HEIGHT),      // Entries
            Constraint::Length(1),             // Spacer
            Constraint::Length(1),             // Help
        ])
        .split(area);

    let theme = app.theme;

    let balance = Line::from(vec![
        Span::styled(" Balance ", theme.title()),
        Span::styled(format!(" {:.2}", app.balance()), theme.focused()),
        Span::styled(
            format!(
                "   in {:.2}  out {:.2}",
                app.ledger.total(Kind::Credit),
                app.ledger.total(Kind::Debit)
            ),
            theme.blurred(),
        ),
    ]);
    frame.render_widget(Paragraph::new(balance), chunks[0]);

    if filter_height > 0 {
        let mut spans = vec![
            Span::styled("Filter: ", theme.focused()),
            Span::raw(app.list.filter().to_string()),
        ];
        if app.list.filter_mode() == FilterMode::Typing {
            spans.push(Span::styled(" ", theme.focused().add_modifier(Modifier::REVERSED)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);
    }

    app.list.set_viewport_height(chunks[3].height);

    if app.list.visible_len() == 0 {
        let hint = if app.list.items().is_empty() {
            "No transactions yet."
        } else {
            "No transactions match the filter."
        };
        frame.render_widget(Paragraph::new(hint).style(theme.blurred()), chunks[3]);
    } else {
        let items: Vec<ListItem> = app
            .list
            .visible_items()
            .map(|txn| {
                ListItem::new(vec![
                    Line::from(txn.title()),
                    Line::from(Span::styled(txn.description(), theme.blurred())),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(theme.focused())
            .highlight_symbol("│ ");

        frame.render_stateful_widget(list, chunks[3], app.list.state_mut());
    }

    let help = if app.show_help {
        help_line(KeyContext::List)
    } else {
        "Use + to add a new transaction  ? more".to_string()
    };
    frame.render_widget(Paragraph::new(help).style(theme.blurred()), chunks[5]);
}
