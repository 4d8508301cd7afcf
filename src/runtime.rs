//! Wiring between the polling worker and the UI

use crate::api::Backend;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::workers::core::EventSender;
use crate::workers::poller::run_poller;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the polling worker.
pub fn start_poller(
    backend: Box<dyn Backend + 'static>,
    shutdown: broadcast::Receiver<()>,
    interval: Duration,
) -> (mpsc::Receiver<Event>, Vec<JoinHandle<()>>) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let events = EventSender::new(event_sender);

    let handle = tokio::spawn(async move {
        run_poller(backend, events, shutdown, interval).await;
    });

    (event_receiver, vec![handle])
}
