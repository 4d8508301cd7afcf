//! Recent trades table component

use super::super::state::DashboardState;
use super::super::utils::{format_currency, label_or_na, trade_action_color};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

/// Render the recent trades table.
pub fn render_trades_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let trades_block = Block::default()
        .title("RECENT TRADES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if state.trades.is_empty() {
        let placeholder = Paragraph::new("No trades yet - start trading bot to see trades")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(trades_block);
        f.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Time"),
        Cell::from("Market"),
        Cell::from("Action"),
        Cell::from("Side"),
        Cell::from("Size"),
        Cell::from("Price"),
        Cell::from("Cost"),
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = state
        .trades
        .iter()
        .map(|trade| {
            let action_color = trade_action_color(trade.action.as_deref());
            Row::new(vec![
                Cell::from(trade.timestamp.clone()),
                Cell::from(trade.ticker.clone()),
                Cell::from(label_or_na(trade.action.as_deref()))
                    .style(Style::default().fg(action_color)),
                Cell::from(label_or_na(trade.side.as_deref())),
                Cell::from(format!("{}", trade.size)),
                Cell::from(format!("{}¢", trade.price)),
                Cell::from(format_currency(trade.cost)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(19),
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(trades_block);

    f.render_widget(table, area);
}
