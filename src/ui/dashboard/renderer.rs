//! Dashboard main renderer

use super::components::{cards, chart, decision, footer, header, logs, trades};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    if state.loading {
        render_loading_placeholder(f, main_chunks[1]);
    } else {
        render_content(f, main_chunks[1], state);
    }

    footer::render_footer(f, main_chunks[2]);
}

/// Shown until the first refresh cycle completes
fn render_loading_placeholder(f: &mut Frame, area: Rect) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    let placeholder = Paragraph::new("Loading dashboard...")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(placeholder, vertical_chunks[1]);
}

fn render_content(f: &mut Frame, area: Rect, state: &DashboardState) {
    // The decision panel collapses when the agent has no decision yet
    let decision_height = if state.decision.is_some() { 4 } else { 0 };

    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(decision_height),
            Constraint::Fill(1),
            Constraint::Percentage(35),
        ])
        .split(area);

    cards::render_summary_cards(f, content_chunks[0], state);

    if let Some(current_decision) = &state.decision {
        decision::render_decision_panel(f, content_chunks[1], current_decision);
    }

    let middle_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(content_chunks[2]);

    chart::render_history_chart(f, middle_chunks[0], state);
    logs::render_logs_panel(f, middle_chunks[1], state);
    trades::render_trades_table(f, content_chunks[3], state);
}
