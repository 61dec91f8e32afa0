//! Shared helpers for score-weighted allocation.

use std::collections::HashMap;

use crate::assets::Asset;
use crate::constants::SCORE_WEIGHT_FLOOR;
use crate::goals::InvestmentGoal;

/// Weight an asset brings to its class pool.
///
/// Floored at [`SCORE_WEIGHT_FLOOR`] so a zero (or missing) score still earns a share.
pub fn score_weight(score: f64) -> f64 {
    score.max(SCORE_WEIGHT_FLOOR)
}

/// Share of the whole portfolio an asset should hold, given its class target
/// and the summed weights of the pool it competes in.
pub fn ideal_percentage(class_goal: f64, score: f64, pool_weight: f64) -> f64 {
    if pool_weight > 0.0 {
        class_goal * (score_weight(score) / pool_weight)
    } else {
        0.0
    }
}

/// Sum of `quantity * current_price` over every asset.
pub fn total_market_value(assets: &[Asset]) -> f64 {
    assets.iter().map(Asset::market_value).sum()
}

/// Market value of every asset in `class`, regardless of quantity.
pub fn class_market_value(assets: &[Asset], class: &str) -> f64 {
    assets
        .iter()
        .filter(|a| a.class == class)
        .map(Asset::market_value)
        .sum()
}

/// `value / total * 100`, or 0 for an empty portfolio.
pub fn percentage_of(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

/// Target percentage per class. A repeated class keeps its last value.
pub(crate) fn goal_percentages(goals: &[InvestmentGoal]) -> HashMap<&str, f64> {
    goals
        .iter()
        .map(|g| (g.class.as_str(), g.percentage))
        .collect()
}

/// Summed score weights per class over the given pool members.
pub(crate) fn class_weight_pools<'a, I>(members: I) -> HashMap<&'a str, f64>
where
    I: IntoIterator<Item = &'a Asset>,
{
    let mut pools: HashMap<&str, f64> = HashMap::new();
    for asset in members {
        *pools.entry(asset.class.as_str()).or_insert(0.0) += score_weight(asset.score);
    }
    pools
}
