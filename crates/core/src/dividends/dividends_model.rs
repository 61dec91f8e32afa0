//! Dividend (provento) models and summaries.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Kind of distribution paid by an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DividendType {
    Dividendos,
    #[serde(rename = "JSCP")]
    Jscp,
    Rendimento,
}

impl DividendType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DividendType::Dividendos => "Dividendos",
            DividendType::Jscp => "JSCP",
            DividendType::Rendimento => "Rendimento",
        }
    }
}

/// A recorded distribution for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dividend {
    pub id: String,
    pub date: NaiveDate,
    pub asset_id: String,
    pub ticker: String,
    pub class: String,
    #[serde(rename = "type")]
    pub dividend_type: DividendType,
    pub value_per_share: Decimal,
    pub total_value: Decimal,
}

/// Input model for recording a dividend. Ticker and class are copied from the asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDividend {
    pub date: NaiveDate,
    pub asset_id: String,
    #[serde(rename = "type")]
    pub dividend_type: DividendType,
    pub value_per_share: Decimal,
    pub total_value: Decimal,
}

impl NewDividend {
    pub fn validate(&self) -> Result<()> {
        if self.asset_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "assetId".to_string(),
            )));
        }
        if self.value_per_share.is_sign_negative() || self.total_value.is_sign_negative() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Dividend values cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Optional criteria for narrowing a dividend list. Unset fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub class: Option<String>,
    pub dividend_type: Option<DividendType>,
    pub ticker: Option<String>,
}

impl DividendFilter {
    pub fn matches(&self, dividend: &Dividend) -> bool {
        self.year.map_or(true, |y| dividend.date.year() == y)
            && self.month.map_or(true, |m| dividend.date.month() == m)
            && self.class.as_ref().map_or(true, |c| &dividend.class == c)
            && self
                .dividend_type
                .map_or(true, |t| dividend.dividend_type == t)
            && self.ticker.as_ref().map_or(true, |t| &dividend.ticker == t)
    }

    pub fn apply<'a>(&self, dividends: &'a [Dividend]) -> Vec<&'a Dividend> {
        dividends.iter().filter(|d| self.matches(d)).collect()
    }
}

/// Totals of received dividends, grouped for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendSummary {
    /// Keyed by `YYYY-MM`.
    pub by_month: BTreeMap<String, Decimal>,
    pub by_type: BTreeMap<String, Decimal>,
    pub by_ticker: BTreeMap<String, Decimal>,
    pub total: Decimal,
    pub count: usize,
}

impl DividendSummary {
    pub fn from_dividends<'a, I>(dividends: I) -> Self
    where
        I: IntoIterator<Item = &'a Dividend>,
    {
        let mut summary = DividendSummary::default();
        for dividend in dividends {
            summary.add(dividend);
        }
        summary.round(DISPLAY_DECIMAL_PRECISION);
        summary
    }

    fn add(&mut self, dividend: &Dividend) {
        let amount = dividend.total_value;
        *self
            .by_month
            .entry(dividend.date.format("%Y-%m").to_string())
            .or_insert(Decimal::ZERO) += amount;
        *self
            .by_type
            .entry(dividend.dividend_type.as_str().to_string())
            .or_insert(Decimal::ZERO) += amount;
        *self
            .by_ticker
            .entry(dividend.ticker.clone())
            .or_insert(Decimal::ZERO) += amount;
        self.total += amount;
        self.count += 1;
    }

    fn round(&mut self, dp: u32) {
        self.total = self.total.round_dp(dp);
        for val in self.by_month.values_mut() {
            *val = val.round_dp(dp);
        }
        for val in self.by_type.values_mut() {
            *val = val.round_dp(dp);
        }
        for val in self.by_ticker.values_mut() {
            *val = val.round_dp(dp);
        }
    }
}
