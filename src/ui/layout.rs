//! Layout constants and helpers for the SolForge TUI.

use ratatui::layout::Rect;

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer key-hint bar (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

// ============================================================================
// Helpers
// ============================================================================

/// Computes a centered popup area of the given size, clamped to `area`.
#[must_use]
pub fn centered_popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
}

// ============================================================================
// Tests
// ============================================================================
