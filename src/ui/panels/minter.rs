//! Mint panel.
//!
//! Two input fields (mint address, amount); Enter submits a mint-to into
//! the session's associated token account, creating the account first when
//! it does not exist yet.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, Focus, MinterField};
use crate::theme::{MUTED_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_border_block;
use crate::ui::panels::{input_field_line, push_outcome_lines};

// ============================================================================
// Minter Panel
// ============================================================================

/// Render the mint panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.ui.focus == Focus::Minter;
    let block = create_border_block("Mint Tokens", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.forms.minter;
    let mut lines: Vec<Line> = vec![
        input_field_line(
            "Mint Address",
            &form.mint_address,
            form.field == MinterField::MintAddress,
            focused,
        ),
        input_field_line(
            "Amount",
            &form.amount,
            form.field == MinterField::Amount,
            focused,
        ),
    ];

    if form.loading {
        lines.push(Line::from(Span::styled(
            "Minting...",
            Style::default().fg(WARNING_COLOR),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Enter: mint tokens",
            Style::default().fg(MUTED_COLOR),
        )));
    }

    push_outcome_lines(&mut lines, form.signature.as_deref(), form.error.as_deref());

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Tests
// ============================================================================
