//! Send panel.
//!
//! Three input fields (mint address, recipient, amount); Enter submits a
//! token transfer, creating the recipient's associated token account in
//! the same transaction when it is missing.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, Focus, SenderField};
use crate::theme::{MUTED_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_border_block;
use crate::ui::panels::{input_field_line, push_outcome_lines};

// ============================================================================
// Sender Panel
// ============================================================================

/// Render the send panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.ui.focus == Focus::Sender;
    let block = create_border_block("Send Tokens", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.forms.sender;
    let mut lines: Vec<Line> = vec![
        input_field_line(
            "Mint Address",
            &form.mint_address,
            form.field == SenderField::MintAddress,
            focused,
        ),
        input_field_line(
            "Recipient",
            &form.recipient,
            form.field == SenderField::Recipient,
            focused,
        ),
        input_field_line(
            "Amount",
            &form.amount,
            form.field == SenderField::Amount,
            focused,
        ),
    ];

    if form.loading {
        lines.push(Line::from(Span::styled(
            "Sending...",
            Style::default().fg(WARNING_COLOR),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Enter: send tokens",
            Style::default().fg(MUTED_COLOR),
        )));
    }

    push_outcome_lines(&mut lines, form.signature.as_deref(), form.error.as_deref());

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Tests
// ============================================================================
