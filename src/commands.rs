//! Command pattern for key event handling in the TUI application.
//!
//! This module provides a clean separation between key input and
//! application actions, making it easy to:
//! - Test key mappings in isolation
//! - Add new keybindings
//! - Support future keybinding customization

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
///
/// The input context determines which keybindings are active and how key
/// events should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// A non-text panel has focus (wallet, creator, history).
    Main,
    /// A panel with text input fields has focus (minter, sender).
    FormInput,
    /// A blocking message popup is open.
    Popup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
///
/// Commands are the result of mapping key events to application actions.
/// This enum represents the "what" of user intent, decoupled from the
/// "how" of key input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Refresh the wallet snapshot and history.
    Refresh,
    /// Connect or disconnect the wallet session.
    ToggleSession,
    /// Dismiss the current popup.
    Dismiss,

    // === Navigation ===
    /// Cycle focus forward through the panels.
    CycleFocus,
    /// Cycle focus backward through the panels.
    CycleFocusBack,
    /// Move to the next field in the focused form.
    FieldNext,
    /// Move to the previous field in the focused form.
    FieldPrev,

    // === Form Editing ===
    /// Type a character into the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,

    // === Actions ===
    /// Submit the focused form.
    Submit,
    /// Copy the focused panel's value to the clipboard.
    CopyFocused,
    /// Open the focused transaction in the explorer.
    OpenExplorer,
}

// ============================================================================
// Key Mapping
// ============================================================================

/// Maps a key event to an application command under the given context.
///
/// Text-input contexts route plain characters into the focused field, so
/// single-letter shortcuts are only live in the `Main` context; Ctrl+C and
/// Tab work everywhere.
#[must_use]
pub fn map_key(key: KeyEvent, context: InputContext) -> Option<AppCommand> {
    // Ctrl+C always quits, regardless of context.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppCommand::Quit);
    }

    match context {
        InputContext::Popup => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(AppCommand::Dismiss),
            _ => None,
        },

        InputContext::Main => match key.code {
            KeyCode::Char('q') => Some(AppCommand::Quit),
            KeyCode::Char('r') => Some(AppCommand::Refresh),
            KeyCode::Char('w') => Some(AppCommand::ToggleSession),
            KeyCode::Char('c') => Some(AppCommand::CopyFocused),
            KeyCode::Char('o') => Some(AppCommand::OpenExplorer),
            KeyCode::Tab => Some(AppCommand::CycleFocus),
            KeyCode::BackTab => Some(AppCommand::CycleFocusBack),
            KeyCode::Enter => Some(AppCommand::Submit),
            _ => None,
        },

        InputContext::FormInput => match key.code {
            KeyCode::Tab => Some(AppCommand::CycleFocus),
            KeyCode::BackTab => Some(AppCommand::CycleFocusBack),
            KeyCode::Up => Some(AppCommand::FieldPrev),
            KeyCode::Down => Some(AppCommand::FieldNext),
            KeyCode::Enter => Some(AppCommand::Submit),
            KeyCode::Backspace => Some(AppCommand::Backspace),
            KeyCode::Char(c) => Some(AppCommand::Input(c)),
            _ => None,
        },
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_key_mapping_all_contexts() {
        struct TestCase {
            name: &'static str,
            key: KeyEvent,
            context: InputContext,
            expected: Option<AppCommand>,
        }

        let cases = [
            TestCase {
                name: "q quits in main",
                key: key(KeyCode::Char('q')),
                context: InputContext::Main,
                expected: Some(AppCommand::Quit),
            },
            TestCase {
                name: "q types into a form field",
                key: key(KeyCode::Char('q')),
                context: InputContext::FormInput,
                expected: Some(AppCommand::Input('q')),
            },
            TestCase {
                name: "q dismisses popup",
                key: key(KeyCode::Char('q')),
                context: InputContext::Popup,
                expected: Some(AppCommand::Dismiss),
            },
            TestCase {
                name: "ctrl+c quits even while typing",
                key: ctrl(KeyCode::Char('c')),
                context: InputContext::FormInput,
                expected: Some(AppCommand::Quit),
            },
            TestCase {
                name: "tab cycles focus from a form",
                key: key(KeyCode::Tab),
                context: InputContext::FormInput,
                expected: Some(AppCommand::CycleFocus),
            },
            TestCase {
                name: "backtab cycles backward",
                key: key(KeyCode::BackTab),
                context: InputContext::Main,
                expected: Some(AppCommand::CycleFocusBack),
            },
            TestCase {
                name: "enter submits in main",
                key: key(KeyCode::Enter),
                context: InputContext::Main,
                expected: Some(AppCommand::Submit),
            },
            TestCase {
                name: "enter submits from a form",
                key: key(KeyCode::Enter),
                context: InputContext::FormInput,
                expected: Some(AppCommand::Submit),
            },
            TestCase {
                name: "arrows move fields in a form",
                key: key(KeyCode::Down),
                context: InputContext::FormInput,
                expected: Some(AppCommand::FieldNext),
            },
            TestCase {
                name: "backspace edits a form field",
                key: key(KeyCode::Backspace),
                context: InputContext::FormInput,
                expected: Some(AppCommand::Backspace),
            },
            TestCase {
                name: "w toggles the session in main",
                key: key(KeyCode::Char('w')),
                context: InputContext::Main,
                expected: Some(AppCommand::ToggleSession),
            },
            TestCase {
                name: "c copies in main",
                key: key(KeyCode::Char('c')),
                context: InputContext::Main,
                expected: Some(AppCommand::CopyFocused),
            },
            TestCase {
                name: "o opens explorer in main",
                key: key(KeyCode::Char('o')),
                context: InputContext::Main,
                expected: Some(AppCommand::OpenExplorer),
            },
            TestCase {
                name: "esc closes popup",
                key: key(KeyCode::Esc),
                context: InputContext::Popup,
                expected: Some(AppCommand::Dismiss),
            },
            TestCase {
                name: "unbound key in main maps to nothing",
                key: key(KeyCode::F(5)),
                context: InputContext::Main,
                expected: None,
            },
            TestCase {
                name: "typing is inert while popup is open",
                key: key(KeyCode::Char('x')),
                context: InputContext::Popup,
                expected: None,
            },
        ];

        for case in cases {
            assert_eq!(
                map_key(case.key, case.context),
                case.expected,
                "{}",
                case.name
            );
        }
    }
}
