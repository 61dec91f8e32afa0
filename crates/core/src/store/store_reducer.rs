use log::debug;
use num_traits::ToPrimitive;
use uuid::Uuid;

use super::{AppState, StoreCommand};
use crate::assets::NewAsset;
use crate::dividends::Dividend;
use crate::errors::Result;
use crate::events::StoreEvent;
use crate::goals::validate_investment_goals;
use crate::Error;

/// Applies one command to a state and returns the next state with the events it produced.
///
/// The input state is never modified. On error no new state is produced.
pub fn reduce(state: &AppState, command: StoreCommand) -> Result<(AppState, Vec<StoreEvent>)> {
    let mut next = state.clone();
    let events = match command {
        StoreCommand::AddAsset(new_asset) => {
            new_asset.validate()?;
            let id = Uuid::new_v4().to_string();
            next.assets.push(new_asset.into_asset(id.clone()));
            vec![StoreEvent::AssetsChanged {
                asset_ids: vec![id],
            }]
        }
        StoreCommand::UpdateAsset(asset) => {
            NewAsset::from(&asset).validate()?;
            let slot = next
                .assets
                .iter_mut()
                .find(|a| a.id == asset.id)
                .ok_or_else(|| asset_not_found(&asset.id))?;
            let id = asset.id.clone();
            *slot = asset;
            vec![StoreEvent::AssetsChanged {
                asset_ids: vec![id],
            }]
        }
        StoreCommand::DeleteAsset(id) => {
            let position = next
                .assets
                .iter()
                .position(|a| a.id == id)
                .ok_or_else(|| asset_not_found(&id))?;
            next.assets.remove(position);
            // Recorded dividends stay in the history.
            vec![StoreEvent::AssetsChanged {
                asset_ids: vec![id],
            }]
        }
        StoreCommand::UpdateInvestmentGoals(goals) => {
            validate_investment_goals(&goals)?;
            next.investment_goals = goals;
            vec![StoreEvent::InvestmentGoalsChanged]
        }
        StoreCommand::AddDividend(new_dividend) => {
            new_dividend.validate()?;
            let asset = next
                .assets
                .iter_mut()
                .find(|a| a.id == new_dividend.asset_id)
                .ok_or_else(|| asset_not_found(&new_dividend.asset_id))?;
            asset.total_dividends += new_dividend.total_value.to_f64().unwrap_or(0.0);

            let dividend = Dividend {
                id: Uuid::new_v4().to_string(),
                date: new_dividend.date,
                asset_id: new_dividend.asset_id,
                ticker: asset.ticker.clone(),
                class: asset.class.clone(),
                dividend_type: new_dividend.dividend_type,
                value_per_share: new_dividend.value_per_share,
                total_value: new_dividend.total_value,
            };
            let asset_id = dividend.asset_id.clone();
            next.dividends.push(dividend);
            vec![StoreEvent::DividendsChanged {
                asset_ids: vec![asset_id],
            }]
        }
        StoreCommand::UpdateDividend { id, dividend } => {
            dividend.validate()?;
            let position = next
                .dividends
                .iter()
                .position(|d| d.id == id)
                .ok_or_else(|| dividend_not_found(&id))?;
            let (ticker, class) = next
                .find_asset(&dividend.asset_id)
                .map(|a| (a.ticker.clone(), a.class.clone()))
                .ok_or_else(|| asset_not_found(&dividend.asset_id))?;

            let current_asset_id = dividend.asset_id.clone();
            let current_total = dividend.total_value.to_f64().unwrap_or(0.0);
            let previous = std::mem::replace(
                &mut next.dividends[position],
                Dividend {
                    id,
                    date: dividend.date,
                    asset_id: dividend.asset_id,
                    ticker,
                    class,
                    dividend_type: dividend.dividend_type,
                    value_per_share: dividend.value_per_share,
                    total_value: dividend.total_value,
                },
            );

            release_dividend(&mut next, &previous);
            if let Some(asset) = next.assets.iter_mut().find(|a| a.id == current_asset_id) {
                asset.total_dividends += current_total;
            }

            let mut asset_ids = vec![previous.asset_id];
            if !asset_ids.contains(&current_asset_id) {
                asset_ids.push(current_asset_id);
            }
            vec![StoreEvent::DividendsChanged { asset_ids }]
        }
        StoreCommand::DeleteDividend(id) => {
            let position = next
                .dividends
                .iter()
                .position(|d| d.id == id)
                .ok_or_else(|| dividend_not_found(&id))?;
            let removed = next.dividends.remove(position);
            release_dividend(&mut next, &removed);
            vec![StoreEvent::DividendsChanged {
                asset_ids: vec![removed.asset_id],
            }]
        }
        StoreCommand::Reset => {
            next = AppState::default();
            vec![StoreEvent::StateReset]
        }
        StoreCommand::Import(json) => {
            next = AppState::from_json(&json)?;
            debug!(
                "Imported state with {} assets, {} goals and {} dividends",
                next.assets.len(),
                next.investment_goals.len(),
                next.dividends.len()
            );
            vec![StoreEvent::StateImported]
        }
    };
    Ok((next, events))
}

fn asset_not_found(id: &str) -> Error {
    Error::NotFound(format!("Asset {} not found", id))
}

fn dividend_not_found(id: &str) -> Error {
    Error::NotFound(format!("Dividend {} not found", id))
}

/// Takes a dividend's total back out of its asset, never below zero.
fn release_dividend(state: &mut AppState, dividend: &Dividend) {
    if let Some(asset) = state.assets.iter_mut().find(|a| a.id == dividend.asset_id) {
        let amount = dividend.total_value.to_f64().unwrap_or(0.0);
        asset.total_dividends = (asset.total_dividends - amount).max(0.0);
    }
}
