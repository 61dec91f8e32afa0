//! Investment goal (class target) models and helpers.

use std::collections::HashSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::assets::INVESTMENT_CLASSES;
use crate::constants::GOALS_SUM_TOLERANCE;
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Target allocation for one asset class.
///
/// Percentages are meant to sum to 100 across all goals. The calculation
/// engine tolerates any sum; only [`validate_investment_goals`] enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentGoal {
    pub class: String,
    #[serde(default)]
    pub percentage: f64,
}

impl InvestmentGoal {
    pub fn new(class: impl Into<String>, percentage: f64) -> Self {
        Self {
            class: class.into(),
            percentage,
        }
    }
}

/// Sum of all target percentages.
pub fn goals_total(goals: &[InvestmentGoal]) -> f64 {
    goals.iter().map(|g| g.percentage).sum()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One goal per catalogue class, split evenly at one decimal place.
/// The last class absorbs the rounding remainder so the set sums to 100.
pub fn default_investment_goals() -> Vec<InvestmentGoal> {
    let count = INVESTMENT_CLASSES.len();
    let base = round_one_decimal(100.0 / count as f64);
    let others = base * (count - 1) as f64;

    INVESTMENT_CLASSES
        .iter()
        .enumerate()
        .map(|(idx, class)| {
            let percentage = if idx == count - 1 {
                round_one_decimal(100.0 - others)
            } else {
                base
            };
            InvestmentGoal::new(*class, percentage)
        })
        .collect()
}

/// Appends a 0% goal for every catalogue class missing from `goals`.
pub fn with_missing_classes(goals: Vec<InvestmentGoal>) -> Vec<InvestmentGoal> {
    let mut result = goals;
    for class in INVESTMENT_CLASSES {
        if !result.iter().any(|g| g.class == class) {
            result.push(InvestmentGoal::new(class, 0.0));
        }
    }
    result
}

/// Checks a goal set before it replaces the stored one.
pub fn validate_investment_goals(goals: &[InvestmentGoal]) -> Result<()> {
    let mut seen = HashSet::new();
    for goal in goals {
        if goal.class.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "class".to_string(),
            )));
        }
        if !seen.insert(goal.class.as_str()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Duplicate target for class '{}'",
                goal.class
            ))));
        }
        if !goal.percentage.is_finite() || !(0.0..=100.0).contains(&goal.percentage) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Target percent for '{}' must be between 0 and 100",
                goal.class
            ))));
        }
    }

    let total = goals_total(goals);
    if (total - 100.0).abs() > GOALS_SUM_TOLERANCE {
        warn!("Rejected investment goals summing to {:.2}%", total);
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Class targets must sum to 100%. Current sum: {:.2}%",
            total
        ))));
    }
    Ok(())
}
