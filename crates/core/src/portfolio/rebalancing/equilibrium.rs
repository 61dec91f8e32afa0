//! Scalar diagnostics of how far a portfolio sits from its class targets.

use std::collections::HashSet;

use crate::assets::Asset;
use crate::goals::InvestmentGoal;

use super::metrics_calculator::calculate_portfolio_metrics;
use super::weighting::{class_market_value, percentage_of, total_market_value};
use super::PortfolioDiagnostics;

/// Scores adherence to class targets on a 0-100 scale (100 = exactly on target).
///
/// Total deviation is the sum of `|current% - target%|` over goals with a positive
/// target, plus the full weight of held value in classes without such a goal.
/// A full swap between two classes deviates by 200, hence the halving.
/// An empty portfolio scores 0.
pub fn calculate_adherence_score(assets: &[Asset], investment_goals: &[InvestmentGoal]) -> u32 {
    let total_value = total_market_value(assets);
    if total_value <= 0.0 {
        return 0;
    }

    let valid_goals: Vec<&InvestmentGoal> = investment_goals
        .iter()
        .filter(|g| g.percentage > 0.0)
        .collect();

    let mut total_deviation: f64 = valid_goals
        .iter()
        .map(|goal| {
            let current = percentage_of(class_market_value(assets, &goal.class), total_value);
            (current - goal.percentage).abs()
        })
        .sum();

    let tracked: HashSet<&str> = valid_goals.iter().map(|g| g.class.as_str()).collect();
    let untracked_value: f64 = assets
        .iter()
        .filter(|a| a.is_held() && !tracked.contains(a.class.as_str()))
        .map(Asset::market_value)
        .sum();
    if untracked_value > 0.0 {
        total_deviation += untracked_value / total_value * 100.0;
    }

    let score = (100.0 - total_deviation / 2.0).max(0.0);
    score.round() as u32
}

/// Cash that must be added, without selling anything, for the most overweight
/// class to dilute down to its target.
///
/// For each goal with a positive target, the class value divided by its target
/// fraction is the total at which that class would sit exactly on target. The
/// largest such total (never below the current total) is the binding one.
pub fn calculate_portfolio_deficit(assets: &[Asset], investment_goals: &[InvestmentGoal]) -> f64 {
    let total_value = total_market_value(assets);
    if total_value <= 0.0 {
        return 0.0;
    }

    let max_theoretical_total = investment_goals
        .iter()
        .filter(|g| g.percentage > 0.0)
        .map(|goal| class_market_value(assets, &goal.class) / (goal.percentage / 100.0))
        .fold(total_value, f64::max);

    max_theoretical_total - total_value
}

/// Total value, adherence score, deficit and class split in one pass over the inputs.
pub fn diagnose_portfolio(
    assets: &[Asset],
    investment_goals: &[InvestmentGoal],
) -> PortfolioDiagnostics {
    let metrics = calculate_portfolio_metrics(assets, investment_goals);
    PortfolioDiagnostics {
        total_value: metrics.total_value,
        adherence_score: calculate_adherence_score(assets, investment_goals),
        deficit: calculate_portfolio_deficit(assets, investment_goals),
        class_allocation: metrics.class_allocation,
    }
}
