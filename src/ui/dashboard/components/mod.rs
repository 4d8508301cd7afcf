//! Dashboard UI components
//!
//! One module per panel of the dashboard

pub mod cards;
pub mod chart;
pub mod decision;
pub mod footer;
pub mod header;
pub mod logs;
pub mod trades;
