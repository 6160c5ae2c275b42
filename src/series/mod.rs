//! Token Value Series Generation
//!
//! This module produces the mock daily series the analytics layer consumes:
//!
//! - **dates**: Calendar date series spanning N days up to today
//! - **synth**: Per-property synthesis of (fundamental, market, premium,
//!   volume) data points from a deterministic growth model plus seeded noise
//!
//! Series are ephemeral: recomputed on every call, never persisted.

pub mod dates;
pub mod synth;

// Re-export commonly used items
pub use dates::{date_series_ending, generate_date_series};
pub use synth::{TokenValueDataPoint, ValueSeriesSynthesizer};
