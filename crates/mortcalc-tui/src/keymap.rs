//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextField,
    PrevField,
    Submit,
    Export,
    ToggleInstallment,
    Left,
    Right,
    Input(char),
    Backspace,
    TablePageUp,
    TablePageDown,
    LogUp,
    LogDown,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('e') if ctrl => KeyAction::Export,
        KeyCode::Char('t') if ctrl => KeyAction::ToggleInstallment,
        KeyCode::Char(' ') => KeyAction::ToggleInstallment,
        KeyCode::Char(_) if ctrl => KeyAction::None,
        KeyCode::Char(c) => KeyAction::Input(c),
        KeyCode::Tab => KeyAction::NextField,
        KeyCode::BackTab => KeyAction::PrevField,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Left => KeyAction::Left,
        KeyCode::Right => KeyAction::Right,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::PageUp => KeyAction::TablePageUp,
        KeyCode::PageDown => KeyAction::TablePageDown,
        KeyCode::Up => KeyAction::LogUp,
        KeyCode::Down => KeyAction::LogDown,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(map_key(ctrl('c')), KeyAction::Quit);
    }

    #[test]
    fn letters_are_input_not_commands() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Input('q'));
        assert_eq!(map_key(key(KeyCode::Char('7'))), KeyAction::Input('7'));
    }

    #[test]
    fn actions() {
        assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::Submit);
        assert_eq!(map_key(ctrl('e')), KeyAction::Export);
        assert_eq!(map_key(ctrl('t')), KeyAction::ToggleInstallment);
        assert_eq!(map_key(key(KeyCode::Char(' '))), KeyAction::ToggleInstallment);
    }

    #[test]
    fn focus_keys() {
        assert_eq!(map_key(key(KeyCode::Tab)), KeyAction::NextField);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            KeyAction::PrevField
        );
    }

    #[test]
    fn scroll_keys() {
        assert_eq!(map_key(key(KeyCode::PageUp)), KeyAction::TablePageUp);
        assert_eq!(map_key(key(KeyCode::PageDown)), KeyAction::TablePageDown);
        assert_eq!(map_key(key(KeyCode::Up)), KeyAction::LogUp);
        assert_eq!(map_key(key(KeyCode::Down)), KeyAction::LogDown);
    }

    #[test]
    fn unbound_keys() {
        assert_eq!(map_key(ctrl('z')), KeyAction::None);
        assert_eq!(map_key(key(KeyCode::F(5))), KeyAction::None);
    }
}
