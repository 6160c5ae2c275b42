//! Analytics Layer
//!
//! Derives summary statistics from the synthesized token value series:
//!
//! - **stats**: Pure numeric helpers (mean, stddev, Pearson correlation)
//! - **metrics**: Per-property `Metrics` computed from a data point series
//! - **history**: The aggregator that assembles one `PropertyValueHistory`
//!   per catalog entry
//!
//! A stateless batch transform: every invocation recomputes from scratch,
//! there is no incremental update path.

pub mod history;
pub mod metrics;
pub mod stats;

// Re-export commonly used items
pub use history::{PropertyValueHistory, ValueHistoryBuilder};
pub use metrics::{compute_metrics, Metrics, RISK_FREE_RATE};
pub use stats::{daily_returns, mean, pearson_correlation, round2, standard_deviation};
