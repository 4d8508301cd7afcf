//! Latest agent decision panel component

use super::super::utils::decision_action_color;
use crate::api::models::Decision;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Render the latest decision panel. Only called when a decision exists.
pub fn render_decision_panel(f: &mut Frame, area: Rect, decision: &Decision) {
    let chip_color = decision_action_color(&decision.action);

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", decision.action),
            Style::default()
                .fg(Color::Black)
                .bg(chip_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Size: {} contracts", decision.size),
            Style::default().fg(Color::White),
        ),
    ]);

    let panel = Paragraph::new(vec![line]).block(
        Block::default()
            .title("LATEST AGENT DECISION")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(panel, area);
}
