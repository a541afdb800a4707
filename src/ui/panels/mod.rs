//! Main content panels: wallet info, the three operation forms and the
//! transaction history.

pub mod creator;
pub mod history;
pub mod minter;
pub mod sender;
pub mod wallet;

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::theme::{ACTIVE_FIELD_STYLE, ERROR_COLOR, MUTED_COLOR, SUCCESS_COLOR};

// ============================================================================
// Shared Form Rendering Helpers
// ============================================================================

/// Builds one "label: value" input line, highlighting the active field of
/// the focused panel and appending a cursor marker to it.
#[must_use]
pub(crate) fn input_field_line(
    label: &str,
    value: &str,
    active: bool,
    panel_focused: bool,
) -> Line<'static> {
    let label_style = Style::default().fg(MUTED_COLOR);
    let value_style = if active && panel_focused {
        ACTIVE_FIELD_STYLE
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(value.to_string(), value_style),
    ];
    if active && panel_focused {
        spans.push(Span::styled("▏", ACTIVE_FIELD_STYLE));
    }

    Line::from(spans)
}

/// Appends the submission outcome lines shared by all forms: the last
/// signature with its explorer hint and the last error, if any.
pub(crate) fn push_outcome_lines(
    lines: &mut Vec<Line<'static>>,
    signature: Option<&str>,
    error: Option<&str>,
) {
    if let Some(signature) = signature {
        lines.push(Line::from(vec![
            Span::styled("Tx: ", Style::default().fg(MUTED_COLOR)),
            Span::styled(
                crate::constants::truncate_prefix(signature, 10),
                Style::default().fg(SUCCESS_COLOR),
            ),
            Span::styled("  (o: explorer, c: copy)", Style::default().fg(MUTED_COLOR)),
        ]));
    }

    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(ERROR_COLOR),
        )));
    }
}
