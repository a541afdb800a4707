//! Wallet information panel.
//!
//! Shows the connected address, the native balance and the token holdings
//! from the last applied snapshot. Everything here reads from the
//! snapshot; the panel itself never fetches.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::{format_token_amount, truncate_middle, truncate_prefix};
use crate::state::{App, Focus};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::create_border_block;

// ============================================================================
// Wallet Panel
// ============================================================================

/// Render the wallet information panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.ui.focus == Focus::Wallet;
    let block = create_border_block("Wallet", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(session) = &app.session else {
        let prompt = Paragraph::new("Please connect your wallet. (press w)")
            .style(Style::default().fg(MUTED_COLOR));
        frame.render_widget(prompt, inner);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Address: ", Style::default().fg(MUTED_COLOR)),
        Span::styled(
            truncate_middle(session.address(), 6, 6),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (c: copy)", Style::default().fg(MUTED_COLOR)),
    ]));

    match &app.data.snapshot {
        Some(snapshot) => {
            lines.push(Line::from(vec![
                Span::styled("Balance: ", Style::default().fg(MUTED_COLOR)),
                Span::styled(
                    format!("{} SOL", snapshot.sol_display()),
                    Style::default()
                        .fg(SUCCESS_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));

            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Token Balances ({})", snapshot.tokens.len()),
                Style::default().add_modifier(Modifier::BOLD),
            )));

            if snapshot.tokens.is_empty() {
                lines.push(Line::from(Span::styled(
                    "  (no tokens yet)",
                    Style::default().fg(MUTED_COLOR),
                )));
            } else {
                let visible = inner.height.saturating_sub(lines.len() as u16 + 5) as usize;
                for token in snapshot.tokens.iter().take(visible.max(1)) {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  {} ", truncate_middle(&token.mint, 6, 4)),
                            Style::default().fg(PRIMARY_COLOR),
                        ),
                        Span::raw(format_token_amount(token.amount)),
                    ]));
                }
            }

            if !snapshot.recent.is_empty() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Recent Transactions",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for record in snapshot.recent.iter().take(3) {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("  {} ", truncate_prefix(&record.signature, 10)),
                            Style::default().fg(PRIMARY_COLOR),
                        ),
                        Span::styled(
                            format!("({})", record.display_time()),
                            Style::default().fg(MUTED_COLOR),
                        ),
                    ]));
                }
            }
        }
        None => {
            lines.push(Line::from(vec![
                Span::styled("Balance: ", Style::default().fg(MUTED_COLOR)),
                Span::styled("Loading...", Style::default().fg(MUTED_COLOR)),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Tests
// ============================================================================
