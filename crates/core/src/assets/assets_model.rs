//! Asset domain models.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_ASSET_SCORE;
use crate::errors::{Result, ValidationError};
use crate::Error;

/// A holding the user owns, or a watchlist entry the user wants to own.
///
/// `class` is an open string matched against `InvestmentGoal::class` by plain
/// equality. Numeric fields default to zero so older saved snapshots still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub class: String,
    pub ticker: String,
    #[serde(default)]
    pub note: String,
    /// Preference weight, 0 to 15. Higher means a larger share of the class target.
    #[serde(default)]
    pub score: f64,
    /// Zero quantity marks a watchlist candidate.
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub average_price: f64,
    /// Cumulative distributions received, maintained by the dividends flow.
    #[serde(default)]
    pub total_dividends: f64,
}

impl Asset {
    /// Market value of the position: `quantity * current_price`.
    pub fn market_value(&self) -> f64 {
        self.quantity * self.current_price
    }

    /// Amount paid for the position at its average price.
    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.average_price
    }

    /// True when the asset is currently held.
    pub fn is_held(&self) -> bool {
        self.quantity > 0.0
    }

    /// True for a zero-quantity asset the user marked with a positive score.
    pub fn is_watchlisted(&self) -> bool {
        self.quantity == 0.0 && self.score > 0.0
    }

    /// Held or watchlisted: eligible to receive new contributions.
    pub fn is_contribution_candidate(&self) -> bool {
        self.is_held() || self.score > 0.0
    }
}

/// Input model for creating a new asset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub class: String,
    pub ticker: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub average_price: f64,
}

impl NewAsset {
    pub fn validate(&self) -> Result<()> {
        if self.ticker.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "ticker".to_string(),
            )));
        }
        if self.class.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "class".to_string(),
            )));
        }
        validate_non_negative("quantity", self.quantity)?;
        validate_non_negative("currentPrice", self.current_price)?;
        validate_non_negative("averagePrice", self.average_price)?;
        if !(0.0..=MAX_ASSET_SCORE).contains(&self.score) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Score must be between 0 and {}",
                MAX_ASSET_SCORE
            ))));
        }
        Ok(())
    }

    /// Builds the stored asset under the given id. Dividends start at zero.
    pub fn into_asset(self, id: String) -> Asset {
        Asset {
            id,
            class: self.class.trim().to_string(),
            ticker: self.ticker.trim().to_uppercase(),
            note: self.note,
            score: self.score,
            quantity: self.quantity,
            current_price: self.current_price,
            average_price: self.average_price,
            total_dividends: 0.0,
        }
    }
}

impl From<&Asset> for NewAsset {
    fn from(asset: &Asset) -> Self {
        Self {
            class: asset.class.clone(),
            ticker: asset.ticker.clone(),
            note: asset.note.clone(),
            score: asset.score,
            quantity: asset.quantity,
            current_price: asset.current_price,
            average_price: asset.average_price,
        }
    }
}

fn validate_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "{} must be a non-negative number",
            field
        ))));
    }
    Ok(())
}
