//! Result models produced by the rebalancing engine.
//!
//! Every record here is derived on each call and never persisted.

use serde::{Deserialize, Serialize};

use crate::assets::Asset;

/// An asset together with its current and ideal weight in the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetrics {
    #[serde(flatten)]
    pub asset: Asset,
    /// Market value of the position.
    pub total_value: f64,
    /// Share of the total portfolio value (0-100).
    pub current_percentage: f64,
    /// Target share: class target times the asset's score-weighted share of its class.
    pub ideal_percentage: f64,
    /// `ideal - current`. Positive means underweight.
    pub gap: f64,
}

/// Current weight of one goal class next to its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAllocation {
    /// Class name, as written in the goal.
    pub name: String,
    /// Current share of the portfolio (0-100).
    pub value: f64,
    /// Target share (0-100).
    pub meta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub total_value: f64,
    pub metrics: Vec<AssetMetrics>,
    /// One entry per goal, highest target first.
    pub class_allocation: Vec<ClassAllocation>,
}

/// A proposed purchase produced by the contribution planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionSuggestion {
    pub id: String,
    pub ticker: String,
    pub class: String,
    /// Amount of cash to put into the asset.
    pub suggested_value: f64,
    pub suggested_qty: f64,
    /// Weight before the contribution, against the current total.
    pub current_percentage: f64,
    /// Weight after the contribution, against the post-contribution total.
    pub after_percentage: f64,
    pub ideal_percentage: f64,
    /// The asset was not held before this suggestion.
    pub is_new_class: bool,
}

/// The scalar diagnostics of a portfolio, computed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDiagnostics {
    pub total_value: f64,
    pub adherence_score: u32,
    pub deficit: f64,
    pub class_allocation: Vec<ClassAllocation>,
}
