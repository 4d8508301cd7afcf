//! Dashboard state update logic
//!
//! Contains all methods for applying refresh-cycle events to dashboard state

use super::state::DashboardState;

use crate::events::{Event as PollerEvent, EventType, Feed, Snapshot};

impl DashboardState {
    /// Update the dashboard state with new tick and queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, mut event: PollerEvent) {
        // Successful fetches replace their slot wholesale. A failed fetch
        // carries no snapshot, so the previous value stays on screen.
        if let Some(snapshot) = event.snapshot.take() {
            match snapshot {
                Snapshot::Portfolio(portfolio) => self.portfolio = Some(portfolio),
                Snapshot::Trades(trades) => self.trades = trades,
                Snapshot::History(history) => self.history = history,
                Snapshot::Decision(decision) => self.decision = decision,
            }
        }

        if event.feed == Feed::Cycle && event.event_type == EventType::Refresh {
            self.record_cycle_complete(event.timestamp.clone());
        }

        // Add to activity logs for display
        self.add_to_activity_log(event);
    }
}
