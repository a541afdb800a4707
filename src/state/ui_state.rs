//! UI state management for the SolForge TUI.
//!
//! This module manages UI presentation concerns: which panel has focus,
//! the modal popup state and the transient toast notification.

// ============================================================================
// Focus
// ============================================================================

/// Represents which panel currently has focus.
///
/// Focus determines which panel receives keyboard input and is visually
/// highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The wallet information panel.
    #[default]
    Wallet,
    /// The token creation panel.
    Creator,
    /// The mint panel.
    Minter,
    /// The send panel.
    Sender,
    /// The transaction history panel.
    History,
}

impl Focus {
    /// Cycles to the next panel.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Wallet => Self::Creator,
            Self::Creator => Self::Minter,
            Self::Minter => Self::Sender,
            Self::Sender => Self::History,
            Self::History => Self::Wallet,
        }
    }

    /// Cycles to the previous panel.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Wallet => Self::History,
            Self::Creator => Self::Wallet,
            Self::Minter => Self::Creator,
            Self::Sender => Self::Minter,
            Self::History => Self::Sender,
        }
    }

    /// Returns the display name of the focused panel.
    #[must_use]
    #[allow(dead_code)] // Part of UI state API
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wallet => "Wallet",
            Self::Creator => "Create Token",
            Self::Minter => "Mint Tokens",
            Self::Sender => "Send Tokens",
            Self::History => "History",
        }
    }

    /// Returns `true` when the panel holds text input fields.
    #[must_use]
    pub const fn accepts_text_input(self) -> bool {
        matches!(self, Self::Minter | Self::Sender)
    }
}

// ============================================================================
// Popup State
// ============================================================================

/// Represents the current popup/modal state.
///
/// Only one popup can be active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// A blocking message popup.
    Message(String),
}

impl PopupState {
    /// Returns `true` if there is an active popup.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: focus, popup state and the toast overlay.
#[derive(Debug, Default)]
pub struct UiState {
    /// Which panel currently has focus.
    pub focus: Focus,
    /// Current popup/modal state.
    pub popup_state: PopupState,
    /// Toast notification message and remaining ticks (non-blocking
    /// overlay).
    pub toast: Option<(String, u8)>,
}

impl UiState {
    /// Creates a new `UiState` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cycles focus forward through the panels.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Cycles focus backward through the panels.
    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Returns `true` if a popup is active.
    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    /// Shows a blocking message popup.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    /// Dismisses the current popup.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Shows a toast notification for the given number of ticks.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Advances the toast countdown, dropping it when expired.
    pub fn tick_toast(&mut self) {
        if let Some((_, ticks)) = &mut self.toast {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.toast = None;
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_covers_all_panels() {
        let mut focus = Focus::default();
        let mut seen = vec![focus];
        for _ in 0..4 {
            focus = focus.next();
            seen.push(focus);
        }
        assert_eq!(focus.next(), Focus::Wallet, "cycle wraps around");
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_focus_prev_inverts_next() {
        for focus in [
            Focus::Wallet,
            Focus::Creator,
            Focus::Minter,
            Focus::Sender,
            Focus::History,
        ] {
            assert_eq!(focus.next().prev(), focus);
        }
    }

    #[test]
    fn test_text_input_panels() {
        assert!(Focus::Minter.accepts_text_input());
        assert!(Focus::Sender.accepts_text_input());
        assert!(!Focus::Wallet.accepts_text_input());
        assert!(!Focus::Creator.accepts_text_input());
        assert!(!Focus::History.accepts_text_input());
    }

    #[test]
    fn test_popup_lifecycle() {
        let mut ui = UiState::new();
        assert!(!ui.has_active_popup());

        ui.show_message("Wallet not connected.");
        assert!(ui.has_active_popup());
        assert_eq!(
            ui.popup_state,
            PopupState::Message("Wallet not connected.".to_string())
        );

        ui.dismiss_popup();
        assert!(!ui.has_active_popup());
    }

    #[test]
    fn test_toast_countdown() {
        let mut ui = UiState::new();
        ui.show_toast("[+] Copied", 2);

        ui.tick_toast();
        assert!(ui.toast.is_some());

        ui.tick_toast();
        assert!(ui.toast.is_none());

        // Ticking with no toast is a no-op.
        ui.tick_toast();
        assert!(ui.toast.is_none());
    }
}
