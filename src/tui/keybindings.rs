//! Keybinding definitions
//!
//! Describes the keyboard shortcuts for each context. The handler matches
//! keys itself; this table drives the help line.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active while the transaction list has focus
    List,
    /// Active while the entry form has focus
    Form,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Char('+'),
        modifiers: KeyModifiers::NONE,
        description: "Add",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('-'),
        modifiers: KeyModifiers::NONE,
        description: "List",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit",
        context: KeyContext::Global,
    },
    // List
    Keybinding {
        key: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        description: "Up",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        description: "Down",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::PageUp,
        modifiers: KeyModifiers::NONE,
        description: "Prev page",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::PageDown,
        modifiers: KeyModifiers::NONE,
        description: "Next page",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('/'),
        modifiers: KeyModifiers::NONE,
        description: "Filter",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Clear filter",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        description: "Quit",
        context: KeyContext::List,
    },
    // Form
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Next",
        context: KeyContext::Form,
    },
    Keybinding {
        key: KeyCode::BackTab,
        modifiers: KeyModifiers::SHIFT,
        description: "Prev",
        context: KeyContext::Form,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Select/Submit",
        context: KeyContext::Form,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context || kb.context == KeyContext::Global)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(key_str);
    parts.join("+")
}

/// One-line summary of the keys for a context
pub fn help_line(context: KeyContext) -> String {
    get_keybindings(context)
        .iter()
        .map(|kb| format!("{} {}", format_keybinding(kb), kb.description))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_includes_global() {
        let list = get_keybindings(KeyContext::List);
        assert!(list.iter().any(|kb| kb.description == "Filter"));
        assert!(list.iter().any(|kb| kb.key == KeyCode::Char('+')));
        assert!(!list.iter().any(|kb| kb.context == KeyContext::Form));
    }

    #[test]
    fn test_format_keybinding() {
        let ctrl_c = KEYBINDINGS
            .iter()
            .find(|kb| kb.modifiers == KeyModifiers::CONTROL)
            .unwrap();
        assert_eq!(format_keybinding(ctrl_c), "Ctrl+c");
    }

    #[test]
    fn test_help_line() {
        let line = help_line(KeyContext::Form);
        assert!(line.starts_with("+ Add  - List  Ctrl+c Quit"));
        assert!(line.contains("Shift+Tab Prev"));
    }
}
