use log::debug;

use crate::assets::Asset;
use crate::constants::{ALLOCATION_EPSILON, MIN_ALLOCATION_AMOUNT};
use crate::goals::InvestmentGoal;

use super::weighting::{
    class_market_value, class_weight_pools, goal_percentages, ideal_percentage, percentage_of,
    total_market_value,
};
use super::ContributionSuggestion;

/// How much a goal class is short of its target in the post-contribution portfolio.
#[derive(Debug, Clone, PartialEq)]
struct ClassDeficit<'a> {
    class: &'a str,
    deficit: f64,
}

/// A held or watchlisted asset competing for its class budget.
#[derive(Debug)]
struct Candidate<'a> {
    asset: &'a Asset,
    current_value: f64,
    ideal_percentage: f64,
}

/// Splits `amount` of new cash into purchase suggestions that move the portfolio
/// toward its class targets. Nothing is ever sold.
///
/// Stage A measures each goal class against its target on the post-contribution
/// total and scales every deficit by the same factor so the suggested spend never
/// exceeds `amount`. Cash beyond what reaches equilibrium is left unsuggested.
///
/// Stage B spreads each funded class budget over the class candidates (held assets
/// plus zero-quantity assets with a positive score) in proportion to how far each
/// one sits below its score-weighted ideal value.
///
/// Output is sorted by suggested value, largest first. Assets that would get one
/// currency unit or less are left out. A non-finite or non-positive amount plans nothing.
pub fn plan_contribution(
    assets: &[Asset],
    investment_goals: &[InvestmentGoal],
    amount: f64,
) -> Vec<ContributionSuggestion> {
    if !amount.is_finite() || amount <= 0.0 {
        return Vec::new();
    }

    let total_value_current = total_market_value(assets);
    let total_value_post = total_value_current + amount;
    let goals = goal_percentages(investment_goals);

    let candidates: Vec<&Asset> = assets
        .iter()
        .filter(|a| a.is_contribution_candidate())
        .collect();
    let pools = class_weight_pools(candidates.iter().copied());

    // Stage A: class deficits against the post-contribution total.
    let mut deficits: Vec<ClassDeficit> = Vec::with_capacity(investment_goals.len());
    let mut total_macro_deficit = 0.0;
    for goal in investment_goals {
        let current_class_value = class_market_value(assets, &goal.class);
        let target_class_value = goal.percentage / 100.0 * total_value_post;
        let deficit = (target_class_value - current_class_value).max(0.0);
        total_macro_deficit += deficit;

        match deficits.iter_mut().find(|d| d.class == goal.class) {
            Some(existing) => existing.deficit = deficit,
            None => deficits.push(ClassDeficit {
                class: &goal.class,
                deficit,
            }),
        }
    }

    let global_scale = if total_macro_deficit > 0.0 {
        (amount / total_macro_deficit).min(1.0)
    } else {
        0.0
    };

    // Stage B: per-asset distribution inside each funded class.
    let mut suggestions = Vec::new();
    for class_deficit in &deficits {
        let class_budget = class_deficit.deficit * global_scale;
        if class_budget <= MIN_ALLOCATION_AMOUNT {
            continue;
        }

        let class_goal = goals.get(class_deficit.class).copied().unwrap_or(0.0);
        let pool = pools.get(class_deficit.class).copied().unwrap_or(0.0);
        let class_candidates: Vec<Candidate> = candidates
            .iter()
            .filter(|a| a.class == class_deficit.class)
            .map(|&asset| Candidate {
                asset,
                current_value: asset.market_value(),
                ideal_percentage: ideal_percentage(class_goal, asset.score, pool),
            })
            .collect();

        let gaps: Vec<f64> = class_candidates
            .iter()
            .map(|c| {
                let target_value = c.ideal_percentage / 100.0 * total_value_post;
                let gap = target_value - c.current_value;
                if gap > ALLOCATION_EPSILON {
                    gap
                } else {
                    0.0
                }
            })
            .collect();
        let gap_sum: f64 = gaps.iter().sum();
        if gap_sum <= 0.0 {
            debug!(
                "Class '{}' is funded with {:.2} but has no underweight candidate",
                class_deficit.class, class_budget
            );
            continue;
        }

        for (candidate, gap) in class_candidates.iter().zip(gaps) {
            if gap <= 0.0 {
                continue;
            }
            let allocation = class_budget * (gap / gap_sum);
            if allocation <= MIN_ALLOCATION_AMOUNT {
                continue;
            }
            suggestions.push(build_suggestion(
                candidate,
                allocation,
                total_value_current,
                total_value_post,
            ));
        }
    }

    suggestions.sort_by(|a, b| b.suggested_value.total_cmp(&a.suggested_value));

    debug!(
        "Planned {} suggestions for a contribution of {:.2} (macro deficit {:.2}, scale {:.4})",
        suggestions.len(),
        amount,
        total_macro_deficit,
        global_scale
    );

    suggestions
}

fn build_suggestion(
    candidate: &Candidate,
    allocation: f64,
    total_value_current: f64,
    total_value_post: f64,
) -> ContributionSuggestion {
    let asset = candidate.asset;
    // A zero price cannot size a quantity; count the allocation in currency units.
    let price = if asset.current_price > 0.0 {
        asset.current_price
    } else {
        1.0
    };

    ContributionSuggestion {
        id: asset.id.clone(),
        ticker: asset.ticker.clone(),
        class: asset.class.clone(),
        suggested_value: allocation,
        suggested_qty: allocation / price,
        current_percentage: percentage_of(candidate.current_value, total_value_current),
        after_percentage: percentage_of(candidate.current_value + allocation, total_value_post),
        ideal_percentage: candidate.ideal_percentage,
        is_new_class: !asset.is_held(),
    }
}
