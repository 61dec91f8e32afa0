use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use carteira_core::assets::{Asset, NewAsset};
use carteira_core::dividends::{DividendFilter, DividendType, NewDividend};
use carteira_core::goals::{
    goals_total, validate_investment_goals, with_missing_classes, InvestmentGoal,
};
use carteira_core::store::{AppStore, StoreCommand};
use clap::Subcommand;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Per-asset current and ideal weights plus the class split
    Metrics,

    /// Suggest purchases for a new contribution
    Plan {
        /// Cash to invest
        #[arg(long)]
        amount: f64,
    },

    /// Adherence to class targets, 0-100
    Adherence,

    /// Cash needed to reach equilibrium without selling
    Deficit,

    /// Total value, adherence, deficit and class split together
    Summary,

    /// Totals of received dividends
    Dividends {
        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        month: Option<u32>,

        #[arg(long)]
        class: Option<String>,

        /// Dividendos | JSCP | Rendimento
        #[arg(long = "type", value_parser = parse_dividend_type)]
        dividend_type: Option<DividendType>,

        #[arg(long)]
        ticker: Option<String>,
    },

    /// Show class targets
    Goals {
        /// Fail unless the targets sum to 100%
        #[arg(long, default_value_t = false)]
        validate: bool,

        /// Append 0% targets for catalogue classes that have none
        #[arg(long, default_value_t = false)]
        with_catalogue: bool,
    },

    /// Replace class targets with the JSON array in FILE
    SetGoals { file: PathBuf },

    /// Replace the whole state with an exported JSON document
    Import { file: PathBuf },

    /// Restore the default state
    Reset,

    /// Add, update or delete assets
    Asset {
        #[command(subcommand)]
        cmd: AssetCmd,
    },

    /// Record, edit or delete dividends
    Dividend {
        #[command(subcommand)]
        cmd: DividendCmd,
    },
}

#[derive(Subcommand, Debug)]
pub enum AssetCmd {
    /// Add the asset described by the JSON object in FILE
    Add { file: PathBuf },

    /// Replace an asset with the JSON object in FILE (matched by its `id`)
    Update { file: PathBuf },

    /// Delete an asset; its recorded dividends are kept
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum DividendCmd {
    /// Record the dividend described by the JSON object in FILE
    Add { file: PathBuf },

    /// Replace dividend ID with the JSON object in FILE
    Update { id: String, file: PathBuf },

    /// Delete a recorded dividend
    Delete { id: String },
}

fn parse_dividend_type(raw: &str) -> std::result::Result<DividendType, String> {
    serde_json::from_value(Value::String(raw.to_string()))
        .map_err(|_| format!("unknown dividend type '{}'", raw))
}

/// Runs one subcommand against the store and returns its JSON output.
pub fn run(command: &Commands, store: &AppStore) -> Result<Value> {
    let value = match command {
        Commands::Metrics => serde_json::to_value(store.portfolio_metrics()?)?,
        Commands::Plan { amount } => {
            if !amount.is_finite() {
                bail!("contribution amount must be a finite number, got {}", amount);
            }
            if *amount <= 0.0 {
                tracing::warn!("Contribution amount {} is not positive, nothing to plan", amount);
            }
            serde_json::to_value(store.plan_contribution(*amount)?)?
        }
        Commands::Adherence => json!({ "adherenceScore": store.adherence_score()? }),
        Commands::Deficit => json!({ "deficit": store.portfolio_deficit()? }),
        Commands::Summary => serde_json::to_value(store.diagnostics()?)?,
        Commands::Dividends {
            year,
            month,
            class,
            dividend_type,
            ticker,
        } => {
            let filter = DividendFilter {
                year: *year,
                month: *month,
                class: class.clone(),
                dividend_type: *dividend_type,
                ticker: ticker.as_ref().map(|t| t.to_uppercase()),
            };
            serde_json::to_value(store.dividend_summary(&filter)?)?
        }
        Commands::Goals {
            validate,
            with_catalogue,
        } => {
            let mut goals = store.snapshot()?.investment_goals.clone();
            if *validate {
                validate_investment_goals(&goals).context("investment goals are invalid")?;
            }
            if *with_catalogue {
                goals = with_missing_classes(goals);
            }
            json!({ "goals": goals, "total": goals_total(&goals) })
        }
        Commands::SetGoals { file } => {
            let goals: Vec<InvestmentGoal> = read_payload(file, "goals")?;
            let state = store.dispatch(StoreCommand::UpdateInvestmentGoals(goals))?;
            json!({ "goals": state.investment_goals, "total": goals_total(&state.investment_goals) })
        }
        Commands::Import { file } => {
            let json = fs::read_to_string(file)
                .with_context(|| format!("reading import file {}", file.display()))?;
            let state = store.dispatch(StoreCommand::Import(json))?;
            json!({
                "assets": state.assets.len(),
                "investmentGoals": state.investment_goals.len(),
                "dividends": state.dividends.len(),
            })
        }
        Commands::Reset => {
            let state = store.dispatch(StoreCommand::Reset)?;
            json!({ "investmentGoals": state.investment_goals })
        }
        Commands::Asset { cmd } => run_asset(cmd, store)?,
        Commands::Dividend { cmd } => run_dividend(cmd, store)?,
    };
    Ok(value)
}

fn run_asset(cmd: &AssetCmd, store: &AppStore) -> Result<Value> {
    let (command, id) = match cmd {
        AssetCmd::Add { file } => {
            let new_asset: NewAsset = read_payload(file, "asset")?;
            (StoreCommand::AddAsset(new_asset), None)
        }
        AssetCmd::Update { file } => {
            let asset: Asset = read_payload(file, "asset")?;
            let id = asset.id.clone();
            (StoreCommand::UpdateAsset(asset), Some(id))
        }
        AssetCmd::Delete { id } => {
            store.dispatch(StoreCommand::DeleteAsset(id.clone()))?;
            return Ok(json!({ "deleted": id }));
        }
    };
    let state = store.dispatch(command)?;
    // A new asset is appended, so it is the last one.
    let asset = match id {
        Some(id) => state.find_asset(&id),
        None => state.assets.last(),
    };
    Ok(serde_json::to_value(asset)?)
}

fn run_dividend(cmd: &DividendCmd, store: &AppStore) -> Result<Value> {
    let (command, id) = match cmd {
        DividendCmd::Add { file } => {
            let dividend: NewDividend = read_payload(file, "dividend")?;
            (StoreCommand::AddDividend(dividend), None)
        }
        DividendCmd::Update { id, file } => {
            let dividend: NewDividend = read_payload(file, "dividend")?;
            (
                StoreCommand::UpdateDividend {
                    id: id.clone(),
                    dividend,
                },
                Some(id.clone()),
            )
        }
        DividendCmd::Delete { id } => {
            store.dispatch(StoreCommand::DeleteDividend(id.clone()))?;
            return Ok(json!({ "deleted": id }));
        }
    };
    let state = store.dispatch(command)?;
    let dividend = match id {
        Some(id) => state.dividends.iter().find(|d| d.id == id),
        None => state.dividends.last(),
    };
    Ok(serde_json::to_value(dividend)?)
}

fn read_payload<T: DeserializeOwned>(file: &Path, what: &str) -> Result<T> {
    let json = fs::read_to_string(file)
        .with_context(|| format!("reading {} file {}", what, file.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing {} file {}", what, file.display()))
}
