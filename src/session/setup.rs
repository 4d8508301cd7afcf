//! Session setup and initialization

use crate::api::ApiClient;
use crate::environment::Environment;
use crate::events::Event;
use crate::logging::LogFilter;
use crate::runtime::start_poller;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for poller events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop the poller
    pub shutdown_sender: broadcast::Sender<()>,
    /// Environment the dashboard reads from
    pub environment: Environment,
    /// Period between refresh cycles
    pub refresh_interval: Duration,
    /// Display threshold for poller events, resolved once from RUST_LOG
    pub log_filter: LogFilter,
}

/// Sets up a dashboard session.
///
/// Creates the API client, the shutdown channel, and the polling worker
/// shared by the TUI and headless modes.
pub fn setup_session(environment: Environment, refresh_interval: Duration) -> SessionData {
    let api_client = ApiClient::new(environment.clone());

    // Only one shutdown signal is needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, join_handles) = start_poller(
        Box::new(api_client),
        shutdown_sender.subscribe(),
        refresh_interval,
    );

    SessionData {
        event_receiver,
        join_handles,
        shutdown_sender,
        environment,
        refresh_interval,
        log_filter: LogFilter::from_env(),
    }
}
