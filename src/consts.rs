pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum event buffer size between the poller and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // RENDERING CONFIGURATION
    // =============================================================================

    /// Baseline capital the P&L percentage is computed against.
    ///
    /// The backend reports its percentage relative to a fixed 10,000 unit
    /// starting balance rather than the current balance. Preserved as-is.
    pub const BASELINE_CAPITAL: f64 = 10_000.0;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Refresh cycle timing configuration
    pub mod refresh {
        use std::time::Duration;

        /// Fixed period between refresh cycles (milliseconds), measured from
        /// cycle start to cycle start.
        pub const REFRESH_INTERVAL_MS: u64 = 5_000;

        /// Helper function to get the refresh interval
        pub const fn interval() -> Duration {
            Duration::from_millis(REFRESH_INTERVAL_MS)
        }
    }
}
