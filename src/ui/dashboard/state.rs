//! Dashboard state management
//!
//! Contains the main dashboard state struct and related accessors

use crate::api::models::{Decision, PortfolioHistoryPoint, PortfolioSnapshot, Trade};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as PollerEvent;
use crate::logging::LogFilter;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Dashboard state fed by refresh-cycle events.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment the dashboard reads from.
    pub environment: Environment,
    /// True until the first refresh cycle completes. One way: once the
    /// dashboard is live it never returns to loading.
    pub loading: bool,
    /// Latest portfolio snapshot, if any cycle has delivered one.
    pub portfolio: Option<PortfolioSnapshot>,
    /// Most recent trades, newest first.
    pub trades: Vec<Trade>,
    /// Portfolio value time series.
    pub history: Vec<PortfolioHistoryPoint>,
    /// Latest agent decision. None when the agent has not decided yet.
    pub decision: Option<Decision>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<PollerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<PollerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Display threshold for the activity log.
    pub log_filter: LogFilter,
    /// Period between refresh cycles, used for the countdown gauge.
    pub refresh_interval: Duration,
    /// Animation tick counter
    pub tick: usize,

    /// Number of completed refresh cycles.
    refresh_count: u64,
    /// Timestamp of the last completed refresh cycle.
    last_refresh_timestamp: Option<String>,
    /// Instant of the last completed refresh cycle, for the countdown.
    last_refresh_instant: Option<Instant>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, ui_config: UIConfig) -> Self {
        Self {
            environment,
            loading: true,
            portfolio: None,
            trades: Vec::new(),
            history: Vec::new(),
            decision: None,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            log_filter: ui_config.log_filter,
            refresh_interval: ui_config.refresh_interval,
            tick: 0,
            refresh_count: 0,
            last_refresh_timestamp: None,
            last_refresh_instant: None,
        }
    }

    // Getter methods for private fields
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    pub fn last_refresh_timestamp(&self) -> &Option<String> {
        &self.last_refresh_timestamp
    }

    pub fn last_refresh_instant(&self) -> Option<Instant> {
        self.last_refresh_instant
    }

    /// Record a completed refresh cycle. Ends the loading state.
    pub fn record_cycle_complete(&mut self, timestamp: String) {
        self.loading = false;
        self.refresh_count += 1;
        self.last_refresh_timestamp = Some(timestamp);
        self.last_refresh_instant = Some(Instant::now());
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: PollerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: PollerEvent) {
        self.pending_events.push_back(event);
    }
}
