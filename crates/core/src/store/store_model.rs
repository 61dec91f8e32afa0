//! Application state snapshot.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::assets::{Asset, NewAsset};
use crate::dividends::{Dividend, NewDividend};
use crate::errors::Result;
use crate::goals::{default_investment_goals, InvestmentGoal};
use crate::Error;

/// The whole document the portfolio engine reads from.
///
/// Owned by the store; callers receive immutable snapshots and pass them into
/// the calculation functions.
///
/// Top-level fields this crate does not model (transactions, budget goals and
/// the like) are kept in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub assets: Vec<Asset>,
    pub investment_goals: Vec<InvestmentGoal>,
    #[serde(default)]
    pub dividends: Vec<Dividend>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            assets: Vec::new(),
            investment_goals: default_investment_goals(),
            dividends: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl AppState {
    /// Rebuilds a state from saved or imported JSON.
    ///
    /// Each collection that is missing or not an array falls back to its default,
    /// so partial and older documents load. Malformed JSON or malformed entries
    /// inside an array are errors.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(mut object) = value else {
            return Err(Error::Serialization(
                "application state must be a JSON object".to_string(),
            ));
        };

        let defaults = AppState::default();
        let assets = array_field(object.remove("assets"))?.unwrap_or(defaults.assets);
        let investment_goals =
            array_field(object.remove("investmentGoals"))?.unwrap_or(defaults.investment_goals);
        let dividends = array_field(object.remove("dividends"))?.unwrap_or(defaults.dividends);
        Ok(Self {
            assets,
            investment_goals,
            dividends,
            extra: object,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn find_asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }
}

fn array_field<T: DeserializeOwned>(value: Option<Value>) -> Result<Option<Vec<T>>> {
    match value {
        Some(v @ Value::Array(_)) => Ok(Some(serde_json::from_value(v)?)),
        _ => Ok(None),
    }
}

/// A state change request. Applied by [`super::reduce`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", content = "payload", rename_all = "camelCase")]
pub enum StoreCommand {
    AddAsset(NewAsset),
    UpdateAsset(Asset),
    DeleteAsset(String),
    UpdateInvestmentGoals(Vec<InvestmentGoal>),
    AddDividend(NewDividend),
    /// Replaces the recorded dividend `id` with new values.
    UpdateDividend {
        id: String,
        dividend: NewDividend,
    },
    DeleteDividend(String),
    Reset,
    Import(String),
}

impl StoreCommand {
    pub const fn name(&self) -> &'static str {
        match self {
            StoreCommand::AddAsset(_) => "addAsset",
            StoreCommand::UpdateAsset(_) => "updateAsset",
            StoreCommand::DeleteAsset(_) => "deleteAsset",
            StoreCommand::UpdateInvestmentGoals(_) => "updateInvestmentGoals",
            StoreCommand::AddDividend(_) => "addDividend",
            StoreCommand::UpdateDividend { .. } => "updateDividend",
            StoreCommand::DeleteDividend(_) => "deleteDividend",
            StoreCommand::Reset => "reset",
            StoreCommand::Import(_) => "import",
        }
    }
}
