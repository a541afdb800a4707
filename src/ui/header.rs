//! Header rendering for the SolForge TUI.
//!
//! Renders the application header with logo, cluster name and the session
//! connection indicator.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::truncate_middle;
use crate::state::App;
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR};

use super::helpers::create_border_block;

// ============================================================================
// Header Rendering
// ============================================================================

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let title = if app.session.is_some() {
        create_animated_logo(app.animation_tick)
    } else {
        create_static_logo()
    };

    let title_paragraph = Paragraph::new(title)
        .style(Style::default())
        .alignment(Alignment::Left);

    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        12.min(area.width.saturating_sub(2)),
        1,
    );
    frame.render_widget(title_paragraph, title_area);

    if area.width > 50 {
        render_session_indicator(frame, area, app);
    }
}

/// Create the animated logo with shimmer effect (shown while connected).
fn create_animated_logo(animation_tick: u64) -> Line<'static> {
    let time = animation_tick as f32 * 0.15;

    let bracket_glow = ((time * 0.8).sin() + 1.0) / 2.0;
    let sol_glow = ((time * 0.8 + 0.5).sin() + 1.0) / 2.0;
    let forge_glow = ((time * 0.8 + 1.0).sin() + 1.0) / 2.0;

    let sol_green = (120.0 + sol_glow * 135.0) as u8;
    let sol_color = Color::Rgb((50.0 * sol_glow) as u8, sol_green, (80.0 * sol_glow) as u8);

    let forge_red = (140.0 + forge_glow * 115.0) as u8;
    let forge_blue = (180.0 + forge_glow * 75.0) as u8;
    let forge_color = Color::Rgb(forge_red, (100.0 * forge_glow) as u8, forge_blue);

    let bracket_intensity = (100.0 + bracket_glow * 155.0) as u8;
    let bracket_color = Color::Rgb(bracket_intensity, bracket_intensity, bracket_intensity);

    Line::from(vec![
        Span::styled("[", Style::default().fg(bracket_color)),
        Span::styled(
            "sol",
            Style::default().fg(sol_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "forge",
            Style::default()
                .fg(forge_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", Style::default().fg(bracket_color)),
    ])
}

/// Create the static logo (shown while disconnected).
fn create_static_logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "sol".green().bold(),
        "forge".magenta().bold(),
        "]".into(),
    ])
}

/// Render cluster and session status on the right side.
fn render_session_indicator(frame: &mut Frame, area: Rect, app: &App) {
    let (session_text, session_style) = match &app.session {
        Some(session) => (
            format!("● {}", truncate_middle(session.address(), 6, 6)),
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        None => (
            "○ disconnected".to_string(),
            Style::default().fg(MUTED_COLOR),
        ),
    };

    let status = Line::from(vec![
        Span::styled(
            format!("{}  ", app.cluster.as_str()),
            Style::default().fg(MUTED_COLOR),
        ),
        Span::styled(session_text, session_style),
    ]);

    let width = 40.min(area.width.saturating_sub(4));
    let status_area = Rect::new(
        area.right().saturating_sub(width + 2),
        area.y + 1,
        width,
        1,
    );

    let paragraph = Paragraph::new(status).alignment(Alignment::Right);
    frame.render_widget(paragraph, status_area);
}

// ============================================================================
// Tests
// ============================================================================
