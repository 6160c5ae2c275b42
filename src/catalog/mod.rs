//! Property Catalog
//!
//! Read-only property records that feed the analytics pipeline:
//! - `Property`: One listed property with pricing and quality fields
//! - `EnergyLabel`: Energy efficiency rating tag
//! - `demo_catalog`: The built-in mock listing set used by the demo binary
//!
//! The catalog is an input collaborator: the analytics modules never
//! mutate it. Entries are validated up front so malformed records fail
//! with a `CatalogError` instead of propagating NaN through the math.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a catalog entry fails validation
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Price must be strictly positive
    #[error("Property '{id}' has non-positive price: {price}")]
    NonPositivePrice { id: String, price: f64 },

    /// Score must lie in [1, 10]
    #[error("Property '{id}' has score {score} outside the 1-10 range")]
    ScoreOutOfRange { id: String, score: f64 },
}

/// Energy efficiency rating of a property
///
/// An explicit tag rather than a free-form string, so presentation
/// attributes can be resolved by a lookup instead of string matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EnergyLabel {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl EnergyLabel {
    /// Get all labels for iteration, best rating first
    pub fn all() -> &'static [EnergyLabel] {
        &[
            EnergyLabel::A,
            EnergyLabel::B,
            EnergyLabel::C,
            EnergyLabel::D,
            EnergyLabel::E,
            EnergyLabel::F,
            EnergyLabel::G,
        ]
    }
}

impl std::fmt::Display for EnergyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            EnergyLabel::A => "A",
            EnergyLabel::B => "B",
            EnergyLabel::C => "C",
            EnergyLabel::D => "D",
            EnergyLabel::E => "E",
            EnergyLabel::F => "F",
            EnergyLabel::G => "G",
        };
        write!(f, "{}", letter)
    }
}

/// One listed property
///
/// Prices are in the catalog's currency unit; `yield_pct` and
/// `appreciation_pct` are plain percentages (5.8 means 5.8%).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// City / neighborhood
    pub location: String,
    /// Investment quality score, 1 (worst) to 10 (best)
    pub score: f64,
    /// Listed price for the whole property
    pub price: f64,
    /// Gross rental yield
    pub yield_pct: f64,
    /// Historical annual appreciation
    pub appreciation_pct: f64,
    /// Living area in square meters
    pub sq_meters: f64,
    /// Construction year
    pub year_built: u32,
    /// Energy efficiency rating
    pub energy_label: EnergyLabel,
    /// Marketing description
    pub description: String,
}

impl Property {
    /// Check the fields the analytics pipeline depends on
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !(self.price > 0.0) {
            return Err(CatalogError::NonPositivePrice {
                id: self.id.clone(),
                price: self.price,
            });
        }
        if !(1.0..=10.0).contains(&self.score) || self.score.is_nan() {
            return Err(CatalogError::ScoreOutOfRange {
                id: self.id.clone(),
                score: self.score,
            });
        }
        Ok(())
    }
}

/// The built-in mock property catalog that drives the demo
pub fn demo_catalog() -> Vec<Property> {
    vec![
        Property {
            id: "prop-001".to_string(),
            name: "Alfama River Lofts".to_string(),
            location: "Lisbon, Portugal".to_string(),
            score: 8.4,
            price: 1_250_000.0,
            yield_pct: 5.8,
            appreciation_pct: 4.2,
            sq_meters: 420.0,
            year_built: 2019,
            energy_label: EnergyLabel::B,
            description: "Renovated riverside lofts with short-let licenses".to_string(),
        },
        Property {
            id: "prop-002".to_string(),
            name: "Kreuzberg Courtyard".to_string(),
            location: "Berlin, Germany".to_string(),
            score: 7.6,
            price: 2_480_000.0,
            yield_pct: 3.9,
            appreciation_pct: 3.1,
            sq_meters: 860.0,
            year_built: 1907,
            energy_label: EnergyLabel::D,
            description: "Altbau residential block around a shared courtyard".to_string(),
        },
        Property {
            id: "prop-003".to_string(),
            name: "Eixample Corner House".to_string(),
            location: "Barcelona, Spain".to_string(),
            score: 6.9,
            price: 1_890_000.0,
            yield_pct: 4.6,
            appreciation_pct: 3.8,
            sq_meters: 640.0,
            year_built: 1931,
            energy_label: EnergyLabel::C,
            description: "Chamfered corner building two blocks from Passeig de Gracia".to_string(),
        },
        Property {
            id: "prop-004".to_string(),
            name: "Canal Belt Residences".to_string(),
            location: "Amsterdam, Netherlands".to_string(),
            score: 9.1,
            price: 3_150_000.0,
            yield_pct: 3.4,
            appreciation_pct: 4.9,
            sq_meters: 510.0,
            year_built: 1688,
            energy_label: EnergyLabel::C,
            description: "Three adjoining canal houses split into eight apartments".to_string(),
        },
        Property {
            id: "prop-005".to_string(),
            name: "Karakoy Warehouse Flats".to_string(),
            location: "Istanbul, Turkey".to_string(),
            score: 5.2,
            price: 740_000.0,
            yield_pct: 7.2,
            appreciation_pct: 6.5,
            sq_meters: 980.0,
            year_built: 1962,
            energy_label: EnergyLabel::E,
            description: "Converted customs warehouse near the Galata Port".to_string(),
        },
        Property {
            id: "prop-006".to_string(),
            name: "Vake Hillside Tower".to_string(),
            location: "Tbilisi, Georgia".to_string(),
            score: 4.7,
            price: 520_000.0,
            yield_pct: 8.1,
            appreciation_pct: 7.4,
            sq_meters: 1_150.0,
            year_built: 2015,
            energy_label: EnergyLabel::C,
            description: "New-build tower with park views and retail podium".to_string(),
        },
        Property {
            id: "prop-007".to_string(),
            name: "Marais Atelier Block".to_string(),
            location: "Paris, France".to_string(),
            score: 8.9,
            price: 4_600_000.0,
            yield_pct: 2.9,
            appreciation_pct: 3.6,
            sq_meters: 720.0,
            year_built: 1874,
            energy_label: EnergyLabel::D,
            description: "Former ateliers converted to gallery-floor apartments".to_string(),
        },
        Property {
            id: "prop-008".to_string(),
            name: "Docklands Quay Point".to_string(),
            location: "Dublin, Ireland".to_string(),
            score: 7.1,
            price: 2_050_000.0,
            yield_pct: 5.1,
            appreciation_pct: 2.8,
            sq_meters: 590.0,
            year_built: 2008,
            energy_label: EnergyLabel::B,
            description: "Quayside apartments a short walk from the tech campuses".to_string(),
        },
    ]
}
