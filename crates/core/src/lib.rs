//! Pure domain logic for the air quality dashboard.
//!
//! Threshold evaluation and the presentation models derived from it (overview
//! chart bars, metric cards). No HTTP and no I/O — callers construct a
//! [`reading::Reading`] and render whatever comes back.

pub mod chart;
pub mod error;
pub mod metrics;
pub mod reading;
pub mod thresholds;
