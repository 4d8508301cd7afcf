//! Refresh cycle polling
//!
//! Fetches the four dashboard feeds from the backend on a fixed period and
//! streams the results to the UI as events.

use super::core::EventSender;
use crate::api::Backend;
use crate::api::error::ApiError;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{EventType, Feed, Snapshot};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;

/// Run one refresh cycle.
///
/// All four requests are issued concurrently and must settle before any
/// commit event is sent, so the UI never observes a partial cycle. Each
/// successful fetch commits independently; a failed fetch becomes a log
/// event and leaves the previous snapshot in place.
pub async fn run_refresh_cycle(backend: &dyn Backend, events: &EventSender) {
    let classifier = ErrorClassifier::new();

    let (portfolio, trades, history, decision) = tokio::join!(
        backend.portfolio(),
        backend.trades(),
        backend.portfolio_history(),
        backend.latest_decision(),
    );

    match portfolio {
        Ok(snapshot) => {
            events
                .send_snapshot(
                    Feed::Portfolio,
                    "Portfolio snapshot updated".to_string(),
                    Snapshot::Portfolio(snapshot),
                )
                .await;
        }
        Err(e) => report_fetch_error(events, &classifier, Feed::Portfolio, &e).await,
    }

    match trades {
        Ok(trades) => {
            events
                .send_snapshot(
                    Feed::Trades,
                    format!("Trade history updated ({} trades)", trades.len()),
                    Snapshot::Trades(trades),
                )
                .await;
        }
        Err(e) => report_fetch_error(events, &classifier, Feed::Trades, &e).await,
    }

    match history {
        Ok(history) => {
            events
                .send_snapshot(
                    Feed::History,
                    format!("Portfolio history updated ({} points)", history.len()),
                    Snapshot::History(history),
                )
                .await;
        }
        Err(e) => report_fetch_error(events, &classifier, Feed::History, &e).await,
    }

    match decision {
        Ok(decision) => {
            events
                .send_snapshot(
                    Feed::Decision,
                    "Latest decision updated".to_string(),
                    Snapshot::Decision(decision),
                )
                .await;
        }
        Err(e) => report_fetch_error(events, &classifier, Feed::Decision, &e).await,
    }

    // Sent unconditionally: the first cycle ends the loading state even when
    // every fetch in it failed.
    events
        .send_cycle_event(
            "Refresh cycle complete".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
        )
        .await;
}

async fn report_fetch_error(
    events: &EventSender,
    classifier: &ErrorClassifier,
    feed: Feed,
    error: &ApiError,
) {
    let log_level = classifier.classify_fetch_error(error);
    events
        .send_feed_error(
            feed,
            format!("Failed to fetch {}: {}", feed_label(feed), error),
            log_level,
        )
        .await;
}

fn feed_label(feed: Feed) -> &'static str {
    match feed {
        Feed::Portfolio => "portfolio",
        Feed::Trades => "trades",
        Feed::History => "portfolio history",
        Feed::Decision => "latest decision",
        Feed::Cycle => "refresh cycle",
    }
}

/// Poll the backend until shutdown.
///
/// The period is fixed rate, measured from cycle start to cycle start, with
/// the first cycle fired immediately on startup. A cycle is awaited before
/// the next tick is taken, so cycles never overlap and a cycle's commits
/// always precede the next cycle's requests. Shutdown wins over a pending
/// tick, so no refresh fires after the UI has gone away.
pub async fn run_poller(
    backend: Box<dyn Backend>,
    events: EventSender,
    mut shutdown: broadcast::Receiver<()>,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.recv() => break,
            _ = ticker.tick() => {
                run_refresh_cycle(backend.as_ref(), &events).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBackend;
    use crate::api::models::{PortfolioHistoryPoint, PortfolioSnapshot};
    use crate::events::Event;
    use tokio::sync::{broadcast, mpsc};

    fn sample_portfolio() -> PortfolioSnapshot {
        PortfolioSnapshot {
            balance: 10532.18,
            pnl: 532.18,
            total_trades: 14,
            win_rate: 57.1,
        }
    }

    fn server_error() -> ApiError {
        ApiError::Http {
            status: 500,
            message: "internal error".to_string(),
        }
    }

    fn collect_events(receiver: &mut mpsc::Receiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn cycle_commits_each_feed_independently() {
        let mut backend = MockBackend::new();
        backend
            .expect_portfolio()
            .returning(|| Ok(sample_portfolio()));
        backend.expect_trades().returning(|| Err(server_error()));
        backend
            .expect_portfolio_history()
            .returning(|| Ok(vec![PortfolioHistoryPoint { step: 0, value: 10000.0 }]));
        backend.expect_latest_decision().returning(|| Ok(None));

        let (sender, mut receiver) = mpsc::channel(16);
        run_refresh_cycle(&backend, &EventSender::new(sender)).await;

        let events = collect_events(&mut receiver);

        // Three feeds commit, the trades failure becomes an error event, and
        // the cycle-complete marker comes last.
        let snapshots: Vec<_> = events.iter().filter(|e| e.snapshot.is_some()).collect();
        assert_eq!(snapshots.len(), 3);
        assert!(
            events
                .iter()
                .any(|e| e.feed == Feed::Trades && e.event_type == EventType::Error)
        );
        let last = events.last().unwrap();
        assert_eq!(last.feed, Feed::Cycle);
        assert_eq!(last.event_type, EventType::Refresh);
    }

    #[tokio::test]
    async fn cycle_complete_is_sent_even_when_every_fetch_fails() {
        let mut backend = MockBackend::new();
        backend.expect_portfolio().returning(|| Err(server_error()));
        backend.expect_trades().returning(|| Err(server_error()));
        backend
            .expect_portfolio_history()
            .returning(|| Err(server_error()));
        backend
            .expect_latest_decision()
            .returning(|| Err(server_error()));

        let (sender, mut receiver) = mpsc::channel(16);
        run_refresh_cycle(&backend, &EventSender::new(sender)).await;

        let events = collect_events(&mut receiver);
        assert!(events.iter().all(|e| e.snapshot.is_none()));
        let last = events.last().unwrap();
        assert_eq!(last.event_type, EventType::Refresh);
    }

    #[tokio::test]
    async fn cycle_survives_closed_event_channel() {
        // The UI can go away mid-flight; sends are best-effort and the cycle
        // must not panic or apply anything afterwards.
        let mut backend = MockBackend::new();
        backend
            .expect_portfolio()
            .returning(|| Ok(sample_portfolio()));
        backend.expect_trades().returning(|| Ok(vec![]));
        backend.expect_portfolio_history().returning(|| Ok(vec![]));
        backend.expect_latest_decision().returning(|| Ok(None));

        let (sender, receiver) = mpsc::channel(16);
        drop(receiver);
        run_refresh_cycle(&backend, &EventSender::new(sender)).await;
    }

    #[tokio::test]
    async fn poller_stops_on_shutdown_without_fetching() {
        let mut backend = MockBackend::new();
        // Shutdown is already signalled, so no fetch may happen.
        backend.expect_portfolio().times(0);
        backend.expect_trades().times(0);
        backend.expect_portfolio_history().times(0);
        backend.expect_latest_decision().times(0);

        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
        shutdown_sender.send(()).unwrap();

        let (sender, mut receiver) = mpsc::channel(16);
        run_poller(
            Box::new(backend),
            EventSender::new(sender),
            shutdown_receiver,
            Duration::from_secs(5),
        )
        .await;

        assert!(collect_events(&mut receiver).is_empty());
    }
}
