//! Core worker utilities

use crate::error_classifier::LogLevel;
use crate::events::{Event, EventType, Feed, Snapshot};
use tokio::sync::mpsc;

/// Common event sending utilities for the poller
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub async fn send_snapshot(&self, feed: Feed, message: String, snapshot: Snapshot) {
        let _ = self
            .sender
            .send(Event::snapshot(feed, message, snapshot))
            .await;
    }

    pub async fn send_feed_error(&self, feed: Feed, message: String, log_level: LogLevel) {
        let _ = self
            .sender
            .send(Event::feed_error(feed, message, log_level))
            .await;
    }

    pub async fn send_cycle_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::cycle(message, event_type, log_level))
            .await;
    }
}
