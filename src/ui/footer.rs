//! Footer rendering module for the SolForge TUI.
//!
//! This module provides the footer bar that displays keyboard shortcuts
//! and other contextual hints at the bottom of the screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the footer bar with keyboard shortcuts for the current context.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer_text = if app.ui.focus.accepts_text_input() {
        "Tab:Panel  Up/Down:Field  Enter:Submit  Ctrl+C:Quit"
    } else {
        "q:Quit  r:Refresh  w:Wallet  c:Copy  o:Explorer  Tab:Panel  Enter:Submit"
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
