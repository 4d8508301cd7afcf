//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::consts::cli_consts::BASELINE_CAPITAL;
use crate::events::Feed;
use ratatui::prelude::Color;

/// Get a ratatui color for a feed based on its type
pub fn get_feed_color(feed: &Feed) -> Color {
    match feed {
        Feed::Portfolio => Color::Cyan,
        Feed::Trades => Color::Yellow,
        Feed::History => Color::Magenta,
        Feed::Decision => Color::Green,
        Feed::Cycle => Color::Gray,
    }
}

/// Format a dollar amount with two decimal places
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a signed dollar amount. The sign always precedes the dollar sign.
pub fn format_signed_currency(amount: f64) -> String {
    if amount >= 0.0 {
        format!("+${:.2}", amount)
    } else {
        format!("-${:.2}", amount.abs())
    }
}

/// Format profit and loss as a percentage of baseline capital
pub fn format_pnl_percent(pnl: f64) -> String {
    format!("({:.2}%)", (pnl / BASELINE_CAPITAL) * 100.0)
}

/// Format win rate with one decimal place
pub fn format_win_rate(win_rate: f64) -> String {
    format!("{:.1}%", win_rate)
}

/// Tone for a profit and loss figure. Zero counts as a gain.
pub fn pnl_color(pnl: f64) -> Color {
    if pnl >= 0.0 { Color::Green } else { Color::Red }
}

/// Color for a decision action chip
pub fn decision_action_color(action: &str) -> Color {
    if action.contains("BUY") {
        Color::Green
    } else if action == "HOLD" {
        Color::Gray
    } else {
        Color::Red
    }
}

/// Color for a trade action cell
pub fn trade_action_color(action: Option<&str>) -> Color {
    match action {
        Some("buy") => Color::Green,
        _ => Color::Yellow,
    }
}

/// Uppercase label for an optional field, or "N/A" when absent
pub fn label_or_na(value: Option<&str>) -> String {
    match value {
        Some(value) => value.to_uppercase(),
        None => "N/A".to_string(),
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                // Get MM-DD
                if let Some(hour_min) = time_part.get(0..5) {
                    // Get HH:MM
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose HTTP error patterns with cleaner messages
    if msg.contains("reqwest::Error") && msg.contains("ConnectTimeout") {
        return "Connection timeout - retrying...".to_string();
    }
    if msg.contains("reqwest::Error") && msg.contains("TimedOut") {
        return "Request timed out - retrying...".to_string();
    }
    if msg.contains("reqwest::Error") {
        return "Network error - retrying...".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(10532.18), "$10532.18");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(4.2), "$4.20");
    }

    #[test]
    fn test_format_signed_currency() {
        assert_eq!(format_signed_currency(532.18), "+$532.18");
        assert_eq!(format_signed_currency(-120.5), "-$120.50");
        assert_eq!(format_signed_currency(0.0), "+$0.00");
    }

    #[test]
    fn test_format_pnl_percent_against_baseline() {
        assert_eq!(format_pnl_percent(532.18), "(5.32%)");
        assert_eq!(format_pnl_percent(-250.0), "(-2.50%)");
        assert_eq!(format_pnl_percent(0.0), "(0.00%)");
    }

    #[test]
    fn test_format_win_rate() {
        assert_eq!(format_win_rate(57.1), "57.1%");
        assert_eq!(format_win_rate(55.0), "55.0%");
        assert_eq!(format_win_rate(0.0), "0.0%");
        assert_eq!(format_win_rate(100.0), "100.0%");
    }

    #[test]
    fn test_pnl_color() {
        assert_eq!(pnl_color(532.18), Color::Green);
        assert_eq!(pnl_color(0.0), Color::Green);
        assert_eq!(pnl_color(-120.5), Color::Red);
    }

    #[test]
    fn test_decision_action_color() {
        assert_eq!(decision_action_color("BUY YES"), Color::Green);
        assert_eq!(decision_action_color("BUY NO"), Color::Green);
        assert_eq!(decision_action_color("HOLD"), Color::Gray);
        assert_eq!(decision_action_color("SELL"), Color::Red);
    }

    #[test]
    fn test_trade_action_color() {
        assert_eq!(trade_action_color(Some("buy")), Color::Green);
        assert_eq!(trade_action_color(Some("sell")), Color::Yellow);
        assert_eq!(trade_action_color(None), Color::Yellow);
    }

    #[test]
    fn test_label_or_na() {
        assert_eq!(label_or_na(Some("buy")), "BUY");
        assert_eq!(label_or_na(Some("yes")), "YES");
        assert_eq!(label_or_na(None), "N/A");
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2026-08-27 14:03:22"),
            "08-27 14:03"
        );
        // Malformed timestamps pass through unchanged
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }
}
