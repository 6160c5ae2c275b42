//! # Atlas Analytics
//!
//! Mock analytics engine for the Atlas real-estate tokenization demo.
//! Synthesizes a daily time series of token values (fundamental vs. market)
//! per property and derives summary statistics from that series.
//!
//! ## Features
//!
//! - **Deterministic mock data**: per-property seeded RNG, so the same
//!   property always yields the same series
//! - **Dual-valued series**: fundamental value from a compound growth model,
//!   market value from a premium/discount overlay
//! - **Summary metrics**: annualized volatility, value correlation,
//!   average premium, price-to-NAV, Sharpe ratio, appreciation
//!
//! ## Modules
//!
//! - [`catalog`]: Property records and the built-in demo catalog
//! - [`series`]: Date series generation and token value synthesis
//! - [`analytics`]: Statistics helpers, metrics, and the history aggregator
//!
//! ## Quick Start
//!
//! ```rust
//! use atlas_analytics::analytics::ValueHistoryBuilder;
//! use atlas_analytics::catalog::demo_catalog;
//! use atlas_analytics::config::ModelConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = demo_catalog();
//!     let builder = ValueHistoryBuilder::new(ModelConfig::default());
//!     let histories = builder.build_all(&catalog)?;
//!
//!     for history in &histories {
//!         println!(
//!             "{}: volatility {:.2}%, P/NAV {:.2}",
//!             history.property_name,
//!             history.metrics.volatility,
//!             history.metrics.price_to_nav
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod series;

// Re-export top-level types for convenience
pub use analytics::{
    compute_metrics, pearson_correlation, standard_deviation, Metrics, PropertyValueHistory,
    ValueHistoryBuilder,
};

pub use catalog::{demo_catalog, CatalogError, EnergyLabel, Property};

pub use config::{Config, ConfigError, LoggingConfig, ModelConfig};

pub use series::{
    date_series_ending, generate_date_series, TokenValueDataPoint, ValueSeriesSynthesizer,
};
