//! Portfolio value chart component

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

/// Render the portfolio value time series as a line chart.
pub fn render_history_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chart_block = Block::default()
        .title("PORTFOLIO VALUE OVER TIME")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if state.history.is_empty() {
        let placeholder = Paragraph::new("No data yet - start trading bot to see chart")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(chart_block);
        f.render_widget(placeholder, area);
        return;
    }

    let points: Vec<(f64, f64)> = state
        .history
        .iter()
        .map(|point| (point.step as f64, point.value))
        .collect();

    let (x_bounds, y_bounds) = chart_bounds(&points);
    let [x_min, x_max] = x_bounds;

    let dataset = Dataset::default()
        .name("Portfolio Value")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightGreen))
        .data(&points);

    let x_labels = vec![
        Span::styled(format!("{:.0}", x_min), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{:.0}", x_max), Style::default().fg(Color::DarkGray)),
    ];
    let y_labels = vec![
        Span::styled(
            format!("{:.0}", y_bounds[0]),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:.0}", y_bounds[1]),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let chart = Chart::new(vec![dataset])
        .block(chart_block)
        .x_axis(
            Axis::default()
                .title(Span::styled("step", Style::default().fg(Color::Gray)))
                .style(Style::default().fg(Color::DarkGray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds(y_bounds)
                .labels(y_labels),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

    f.render_widget(chart, area);
}

/// Axis bounds for a non-empty point set.
///
/// Both axes are widened around degenerate spans: a single point gets a
/// one-unit margin on each side of x, and the y bounds are padded so a flat
/// series still renders mid-chart instead of on the axis line.
fn chart_bounds(points: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    let mut x_min = points.first().map(|(x, _)| *x).unwrap_or(0.0);
    let mut x_max = points.last().map(|(x, _)| *x).unwrap_or(0.0);
    if x_min == x_max {
        x_min -= 1.0;
        x_max += 1.0;
    }

    let y_min = points.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = points
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_padding = ((y_max - y_min) * 0.1).max(1.0);

    ([x_min, x_max], [y_min - y_padding, y_max + y_padding])
}
