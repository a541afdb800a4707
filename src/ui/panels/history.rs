//! Transaction history panel.
//!
//! Renders up to the five most recent signatures for the session address
//! with best-effort timestamps. An empty result ("No recent transactions")
//! is a distinct state from a failed fetch.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::truncate_prefix;
use crate::state::{App, Focus, HistoryState};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};
use crate::ui::helpers::create_border_block;

// ============================================================================
// History Panel
// ============================================================================

/// Render the transaction history panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.ui.focus == Focus::History;
    let block = create_border_block("Transaction History", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = match &app.data.history {
        HistoryState::Idle => vec![Line::from(Span::styled(
            "Please connect your wallet.",
            Style::default().fg(MUTED_COLOR),
        ))],
        HistoryState::Loading => vec![Line::from(Span::styled(
            "Loading transactions...",
            Style::default().fg(MUTED_COLOR),
        ))],
        HistoryState::Empty => vec![Line::from(Span::styled(
            "No recent transactions.",
            Style::default().fg(MUTED_COLOR),
        ))],
        HistoryState::Failed(message) => vec![Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(ERROR_COLOR),
        ))],
        HistoryState::Loaded(records) => records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Line::from(vec![
                    Span::styled(
                        format!("Tx {}: ", index + 1),
                        Style::default().fg(MUTED_COLOR),
                    ),
                    Span::styled(
                        truncate_prefix(&record.signature, 10),
                        Style::default().fg(PRIMARY_COLOR),
                    ),
                    Span::styled(
                        format!(" ({})", record.display_time()),
                        Style::default().fg(WARNING_COLOR),
                    ),
                ])
            })
            .collect(),
    };

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SignatureRecord;
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
        let backend = TestBackend::new(70, 9);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_history_states_render_distinct_messages() {
        struct TestCase {
            name: &'static str,
            state: HistoryState,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                name: "idle",
                state: HistoryState::Idle,
                expected: "Please connect your wallet.",
            },
            TestCase {
                name: "loading",
                state: HistoryState::Loading,
                expected: "Loading transactions...",
            },
            TestCase {
                name: "empty is not an error",
                state: HistoryState::Empty,
                expected: "No recent transactions.",
            },
            TestCase {
                name: "failed",
                state: HistoryState::Failed("Failed to fetch transactions.".to_string()),
                expected: "Failed to fetch transactions.",
            },
        ];

        for case in cases {
            let mut app = App::new_for_tests();
            app.data.history = case.state;
            let content = render_to_string(&app);
            assert!(
                content.contains(case.expected),
                "{}: expected '{}' in output",
                case.name,
                case.expected
            );
        }
    }

    #[test]
    fn test_loaded_history_lists_signatures_with_times() {
        let mut app = App::new_for_tests();
        app.data.history = HistoryState::Loaded(vec![
            SignatureRecord {
                signature: "5j7s6NiJS3JAkvgkoc18WVAsiSaci2pxB2A6ueCJP4tp".to_string(),
                block_time: Some(1_700_000_000),
            },
            SignatureRecord {
                signature: "3AsdAnotherSignatureValue".to_string(),
                block_time: None,
            },
        ]);

        let content = render_to_string(&app);
        assert!(content.contains("Tx 1: 5j7s6NiJS3..."));
        assert!(content.contains("2023-11-14"));
        assert!(content.contains("Tx 2: 3AsdAnothe..."));
        assert!(content.contains("(Unknown)"));
    }
}
