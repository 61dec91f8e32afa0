//! Rebalancing engine: current-versus-ideal metrics, contribution planning and
//! equilibrium diagnostics. Every function here is pure and reads only its arguments.

mod contribution_planner;
mod equilibrium;
mod metrics_calculator;
mod rebalancing_model;
mod weighting;

#[cfg(test)]
mod contribution_planner_tests;

pub use contribution_planner::plan_contribution;
pub use equilibrium::{calculate_adherence_score, calculate_portfolio_deficit, diagnose_portfolio};
pub use metrics_calculator::calculate_portfolio_metrics;
pub use rebalancing_model::{
    AssetMetrics, ClassAllocation, ContributionSuggestion, PortfolioDiagnostics, PortfolioMetrics,
};
pub use weighting::{
    class_market_value, ideal_percentage, percentage_of, score_weight, total_market_value,
};
