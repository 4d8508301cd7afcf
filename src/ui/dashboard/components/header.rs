//! Dashboard header component
//!
//! Renders the title and refresh gauge

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and refresh countdown gauge.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    // Title section with version and backend URL
    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!(
        "BOTDECK v{} - {}",
        version,
        state.environment.api_base_url()
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: loading animation until the first cycle, then a countdown
    // to the next refresh
    let (progress_text, gauge_color, progress_percent) = if state.loading {
        // Animated loading gauge - loops every 20 ticks for smooth animation
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        (
            "LOADING - Waiting for first snapshot".to_string(),
            Color::LightBlue,
            progress,
        )
    } else {
        let interval_secs = state.refresh_interval.as_secs().max(1);
        let elapsed_secs = state
            .last_refresh_instant()
            .map(|instant| instant.elapsed().as_secs())
            .unwrap_or(0);
        let remaining_secs = interval_secs.saturating_sub(elapsed_secs);
        let progress = ((elapsed_secs as f64 / interval_secs as f64) * 100.0) as u16;
        let display_text = if remaining_secs > 0 {
            format!("LIVE - Next refresh in {}s", remaining_secs)
        } else {
            "LIVE - Refreshing...".to_string()
        };
        (display_text, Color::LightGreen, progress.min(100))
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
