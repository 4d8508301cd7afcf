//! Dashboard summary cards component
//!
//! Renders the four headline portfolio metrics

use super::super::state::DashboardState;
use super::super::utils::{
    format_currency, format_pnl_percent, format_signed_currency, format_win_rate, pnl_color,
};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the four summary cards in a horizontal row.
pub fn render_summary_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    // Zeroed values until the first portfolio snapshot lands
    let portfolio = state.portfolio.clone().unwrap_or_default();

    render_card(
        f,
        card_chunks[0],
        "BALANCE",
        vec![Line::from(Span::styled(
            format_currency(portfolio.balance),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))],
    );

    let pnl_tone = pnl_color(portfolio.pnl);
    render_card(
        f,
        card_chunks[1],
        "P&L",
        vec![
            Line::from(Span::styled(
                format_signed_currency(portfolio.pnl),
                Style::default().fg(pnl_tone).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format_pnl_percent(portfolio.pnl),
                Style::default().fg(pnl_tone),
            )),
        ],
    );

    render_card(
        f,
        card_chunks[2],
        "TOTAL TRADES",
        vec![Line::from(Span::styled(
            format!("{}", portfolio.total_trades),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))],
    );

    render_card(
        f,
        card_chunks[3],
        "WIN RATE",
        vec![Line::from(Span::styled(
            format_win_rate(portfolio.win_rate),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))],
    );
}

/// Render a single bordered metric card
fn render_card(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(card, area);
}
