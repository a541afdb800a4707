//! UI rendering module for the SolForge TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of all UI components including panels, popups and overlays.
//!
//! # Module Structure
//!
//! - `panels` - Main content panels (wallet, forms, history)
//! - `popups` - Modal dialogs (blocking messages)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout constants and helpers
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::state::{App, PopupState};

use layout::{FOOTER_HEIGHT, HEADER_HEIGHT};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// 1. Main layout (header, content, footer)
/// 2. Popup overlay based on the current popup state
/// 3. Toast notification as a non-blocking overlay
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(size);

    header::render(frame, chunks[0], app);
    render_main_content(app, frame, chunks[1]);
    footer::render(frame, chunks[2], app);

    if let PopupState::Message(message) = &app.ui.popup_state {
        popups::message::render(frame, size, message);
    }

    // Toast renders on top of everything (non-blocking overlay).
    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Internal Rendering Functions
// ============================================================================

/// Render the main content area: wallet/history on the left, the three
/// operation panels on the right.
fn render_main_content(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(8)])
        .split(columns[0]);

    panels::wallet::render(frame, left[0], app);
    panels::history::render(frame, left[1], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Min(8),
        ])
        .split(columns[1]);

    panels::creator::render(frame, right[0], app);
    panels::minter::render(frame, right[1], app);
    panels::sender::render(frame, right[2], app);
}

// ============================================================================
// Tests
// ============================================================================
