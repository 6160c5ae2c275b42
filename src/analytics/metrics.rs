//! Derived Metrics
//!
//! Computes the per-property summary scalars shown in the metrics panel
//! from a token value data point series. All outputs are rounded to
//! 2 decimal places for presentation stability.

use crate::analytics::stats::{daily_returns, mean, pearson_correlation, round2, standard_deviation};
use crate::series::TokenValueDataPoint;
use serde::{Deserialize, Serialize};

/// Fixed risk-free rate used by the Sharpe ratio (1%)
pub const RISK_FREE_RATE: f64 = 0.01;

/// Summary statistics derived from one property's value history
///
/// Read-only scalars computed once per history. Percentages are plain
/// numbers (5.8 means 5.8%). `price_to_nav == 100 + average_premium`
/// holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Annualized stddev of market daily returns, in percent
    pub volatility: f64,
    /// Pearson correlation between fundamental and market series
    pub value_correlation: f64,
    /// Mean premium over the window, in percent
    pub average_premium: f64,
    /// Market value as a percentage of fundamental value; 100 is par
    pub price_to_nav: f64,
    /// Risk-adjusted return; 0.0 when volatility is zero
    pub sharpe_ratio: f64,
    /// Fundamental value change over the window, in percent
    pub property_appreciation: f64,
    /// Market value change over the window, in percent
    pub token_appreciation: f64,
}

impl Metrics {
    /// A zeroed report (par price-to-NAV), used for empty series
    pub fn empty() -> Self {
        Self {
            volatility: 0.0,
            value_correlation: 0.0,
            average_premium: 0.0,
            price_to_nav: 100.0,
            sharpe_ratio: 0.0,
            property_appreciation: 0.0,
            token_appreciation: 0.0,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::empty()
    }
}

/// Derive `Metrics` from a data point series
///
/// Volatility is the population stddev of market daily returns,
/// annualized with sqrt(365) and expressed in percent. The Sharpe ratio
/// uses `annualizedReturn = tokenAppreciation / 365 * n` against the
/// fixed [`RISK_FREE_RATE`]; zero volatility clamps it to 0.0 instead of
/// propagating infinity.
pub fn compute_metrics(points: &[TokenValueDataPoint]) -> Metrics {
    if points.is_empty() {
        return Metrics::empty();
    }

    let fundamental: Vec<f64> = points.iter().map(|p| p.fundamental_value).collect();
    let market: Vec<f64> = points.iter().map(|p| p.market_value).collect();
    let premium: Vec<f64> = points.iter().map(|p| p.premium).collect();

    let volatility = round2(standard_deviation(&daily_returns(&market)) * 365.0_f64.sqrt() * 100.0);
    let average_premium = round2(mean(&premium));
    let value_correlation = round2(pearson_correlation(&fundamental, &market));

    let property_appreciation = round2(appreciation_pct(&fundamental));
    let token_appreciation = round2(appreciation_pct(&market));

    let annualized_return = token_appreciation / 365.0 * points.len() as f64;
    let sharpe_ratio = if volatility == 0.0 {
        0.0
    } else {
        round2((annualized_return - RISK_FREE_RATE) / (volatility / 100.0))
    };

    Metrics {
        volatility,
        value_correlation,
        average_premium,
        // By construction, not independently re-derived.
        price_to_nav: 100.0 + average_premium,
        sharpe_ratio,
        property_appreciation,
        token_appreciation,
    }
}

/// Percentage change from first to last value; 0.0 for degenerate input
fn appreciation_pct(values: &[f64]) -> f64 {
    match (values.first(), values.last()) {
        (Some(&first), Some(&last)) if first != 0.0 => (last - first) / first * 100.0,
        _ => 0.0,
    }
}
