//! Property Value History Aggregator
//!
//! Walks the property catalog, synthesizes a value series per property,
//! computes its metrics, and assembles one `PropertyValueHistory` per
//! entry. Properties are independent of each other; the builder runs
//! them sequentially in catalog order.

use crate::analytics::metrics::{compute_metrics, Metrics};
use crate::catalog::{CatalogError, Property};
use crate::config::ModelConfig;
use crate::series::{TokenValueDataPoint, ValueSeriesSynthesizer};
use serde::{Deserialize, Serialize};

/// One property's synthesized series plus its derived metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValueHistory {
    pub property_id: String,
    pub property_name: String,
    /// Ordered daily data points, oldest first
    pub data: Vec<TokenValueDataPoint>,
    pub metrics: Metrics,
}

/// Builds value histories for a whole catalog
#[derive(Debug, Clone)]
pub struct ValueHistoryBuilder {
    synthesizer: ValueSeriesSynthesizer,
    window_days: u32,
}

impl Default for ValueHistoryBuilder {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}

impl ValueHistoryBuilder {
    /// Create a builder from model configuration
    pub fn new(config: ModelConfig) -> Self {
        Self {
            synthesizer: ValueSeriesSynthesizer::new(config.tokens_per_property),
            window_days: config.window_days,
        }
    }

    /// Build one history per catalog entry, in catalog order
    ///
    /// Every entry is validated before any series is synthesized, so a
    /// malformed catalog fails fast instead of producing NaN histories.
    pub fn build_all(
        &self,
        catalog: &[Property],
    ) -> Result<Vec<PropertyValueHistory>, CatalogError> {
        for property in catalog {
            property.validate()?;
        }

        let histories = catalog
            .iter()
            .map(|property| self.build_one(property))
            .collect();

        tracing::debug!(
            properties = catalog.len(),
            window_days = self.window_days,
            "Built value histories"
        );

        Ok(histories)
    }

    /// Build the history for a single validated property
    pub fn build_one(&self, property: &Property) -> PropertyValueHistory {
        let data = self.synthesizer.synthesize(property, self.window_days);
        let metrics = compute_metrics(&data);

        tracing::trace!(
            property_id = %property.id,
            points = data.len(),
            volatility = metrics.volatility,
            "Synthesized value history"
        );

        PropertyValueHistory {
            property_id: property.id.clone(),
            property_name: property.name.clone(),
            data,
            metrics,
        }
    }
}
