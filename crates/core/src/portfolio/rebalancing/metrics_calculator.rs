use log::debug;

use crate::assets::Asset;
use crate::goals::InvestmentGoal;

use super::weighting::{
    class_market_value, class_weight_pools, goal_percentages, ideal_percentage, percentage_of,
    total_market_value,
};
use super::{AssetMetrics, ClassAllocation, PortfolioMetrics};

/// Computes each asset's current weight, its ideal weight and the gap between them,
/// plus the current-versus-target split for every goal class.
///
/// Ideal weights only go to held assets (`quantity > 0`): the class target is split
/// among them in proportion to their floored score. Watchlisted assets get 0 here.
pub fn calculate_portfolio_metrics(
    assets: &[Asset],
    investment_goals: &[InvestmentGoal],
) -> PortfolioMetrics {
    let total_value = total_market_value(assets);
    let goals = goal_percentages(investment_goals);
    let pools = class_weight_pools(assets.iter().filter(|a| a.is_held()));

    let metrics: Vec<AssetMetrics> = assets
        .iter()
        .map(|asset| {
            let asset_value = asset.market_value();
            let current_percentage = percentage_of(asset_value, total_value);

            let ideal = if asset.is_held() {
                let class_goal = goals.get(asset.class.as_str()).copied().unwrap_or(0.0);
                let pool = pools.get(asset.class.as_str()).copied().unwrap_or(0.0);
                ideal_percentage(class_goal, asset.score, pool)
            } else {
                0.0
            };

            AssetMetrics {
                asset: asset.clone(),
                total_value: asset_value,
                current_percentage,
                ideal_percentage: ideal,
                gap: ideal - current_percentage,
            }
        })
        .collect();

    let mut class_allocation: Vec<ClassAllocation> = investment_goals
        .iter()
        .map(|goal| ClassAllocation {
            name: goal.class.clone(),
            value: percentage_of(class_market_value(assets, &goal.class), total_value),
            meta: goal.percentage,
        })
        .collect();
    class_allocation.sort_by(|a, b| b.meta.total_cmp(&a.meta));

    debug!(
        "Computed metrics for {} assets across {} classes (total value {:.2})",
        metrics.len(),
        class_allocation.len(),
        total_value
    );

    PortfolioMetrics {
        total_value,
        metrics,
        class_allocation,
    }
}
