//! Token creation panel.
//!
//! No input fields: Enter submits a fresh mint with 6 decimals, authority
//! and freeze authority set to the session address. The created mint
//! address and the confirming signature stay on display for copying.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::{TOKEN_DECIMALS, truncate_middle};
use crate::state::{App, Focus};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_border_block;
use crate::ui::panels::push_outcome_lines;

// ============================================================================
// Creator Panel
// ============================================================================

/// Render the token creation panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.ui.focus == Focus::Creator;
    let block = create_border_block("Create Token", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.forms.creator;
    let mut lines: Vec<Line> = Vec::new();

    if form.loading {
        lines.push(Line::from(Span::styled(
            "Creating...",
            Style::default().fg(WARNING_COLOR),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                " to create a new token ({TOKEN_DECIMALS} decimals)"
            )),
        ]));
    }

    if let Some(mint) = &form.mint_address {
        lines.push(Line::from(vec![
            Span::styled("Mint: ", Style::default().fg(MUTED_COLOR)),
            Span::styled(
                truncate_middle(mint, 8, 8),
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    push_outcome_lines(&mut lines, form.signature.as_deref(), form.error.as_deref());

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
        let mut result = String::new();
        for y in 0..buffer.area().height {
            for x in 0..buffer.area().width {
                result.push_str(buffer[(x, y)].symbol());
            }
            result.push('\n');
        }
        result
    }

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_idle_panel_shows_submit_hint() {
        let app = App::new_for_tests();
        let content = render_to_string(&app);
        assert!(content.contains("create a new token"));
        assert!(content.contains("6 decimals"));
    }

    #[test]
    fn test_loading_panel_shows_progress() {
        let mut app = App::new_for_tests();
        app.forms.creator.loading = true;
        let content = render_to_string(&app);
        assert!(content.contains("Creating..."));
    }

    #[test]
    fn test_created_mint_is_truncated_for_display() {
        let mut app = App::new_for_tests();
        app.forms.creator.mint_address =
            Some("4Nd1mYvM6kdLXUnyjWdJQCDqjLVVGR9LoUK1Rv6ZvLhN".to_string());
        app.forms.creator.signature = Some("5GqSigExample".to_string());

        let content = render_to_string(&app);
        assert!(content.contains("4Nd1mYvM...Rv6ZvLhN"));
        assert!(content.contains("5GqSigExam..."));
    }

    #[test]
    fn test_error_is_rendered() {
        let mut app = App::new_for_tests();
        app.forms.creator.error = Some("RPC error: blockhash not found".to_string());
        let content = render_to_string(&app);
        assert!(content.contains("RPC error: blockhash not found"));
    }
}
