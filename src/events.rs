//! Event System
//!
//! Types carried from the polling worker to the dashboard and the headless
//! console logger.

use crate::api::models::{Decision, PortfolioHistoryPoint, PortfolioSnapshot, Trade};
use crate::error_classifier::LogLevel;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Feed {
    /// Portfolio summary snapshot.
    Portfolio,
    /// Recent trade history.
    Trades,
    /// Portfolio value time series.
    History,
    /// Latest agent decision.
    Decision,
    /// Whole refresh cycle bookkeeping.
    Cycle,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

/// A replacement payload for one dashboard slot. Slots are always replaced
/// wholesale, never merged.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Portfolio(PortfolioSnapshot),
    Trades(Vec<Trade>),
    History(Vec<PortfolioHistoryPoint>),
    Decision(Option<Decision>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub feed: Feed,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Payload for successful fetches.
    pub snapshot: Option<Snapshot>,
}

impl Event {
    fn new(feed: Feed, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            feed,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            snapshot: None,
        }
    }

    /// A successful fetch carrying the replacement snapshot for one slot.
    /// Logged at debug level so routine refreshes don't flood the activity log.
    pub fn snapshot(feed: Feed, msg: String, snapshot: Snapshot) -> Self {
        let mut event = Self::new(feed, msg, EventType::Success, LogLevel::Debug);
        event.snapshot = Some(snapshot);
        event
    }

    pub fn feed_error(feed: Feed, msg: String, log_level: LogLevel) -> Self {
        Self::new(feed, msg, EventType::Error, log_level)
    }

    pub fn cycle(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Feed::Cycle, msg, event_type, log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_event_is_debug_success() {
        let event = Event::snapshot(
            Feed::Portfolio,
            "Portfolio snapshot updated".to_string(),
            Snapshot::Portfolio(PortfolioSnapshot::default()),
        );
        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(event.log_level, LogLevel::Debug);
        assert!(event.snapshot.is_some());
    }

    #[test]
    fn test_feed_error_carries_no_snapshot() {
        let event = Event::feed_error(
            Feed::Trades,
            "Failed to fetch trades".to_string(),
            LogLevel::Warn,
        );
        assert_eq!(event.event_type, EventType::Error);
        assert_eq!(event.snapshot, None);
    }

    #[test]
    fn test_display_format() {
        let event = Event::cycle(
            "Refresh cycle complete".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
        );
        let text = format!("{}", event);
        assert!(text.starts_with("Refresh ["));
        assert!(text.ends_with("] Refresh cycle complete"));
    }
}
