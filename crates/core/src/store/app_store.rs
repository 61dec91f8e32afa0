use std::sync::{Arc, RwLock};

use log::{debug, info};

use super::{reduce, AppState, StoreCommand};
use crate::dividends::{DividendFilter, DividendSummary};
use crate::errors::Result;
use crate::events::StoreEventSink;
use crate::portfolio::rebalancing::{
    calculate_adherence_score, calculate_portfolio_deficit, calculate_portfolio_metrics,
    diagnose_portfolio, plan_contribution, ContributionSuggestion, PortfolioDiagnostics,
    PortfolioMetrics,
};
use crate::Error;

/// Single owner of the application state.
///
/// Commands are applied one at a time under a write lock; readers get a cheap
/// `Arc` snapshot that stays valid while later commands land.
pub struct AppStore {
    state: RwLock<Arc<AppState>>,
    event_sink: Arc<dyn StoreEventSink>,
}

impl AppStore {
    pub fn new(state: AppState, event_sink: Arc<dyn StoreEventSink>) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
            event_sink,
        }
    }

    /// Applies a command, swaps in the resulting state and emits its events.
    pub fn dispatch(&self, command: StoreCommand) -> Result<Arc<AppState>> {
        let name = command.name();
        let mut guard = self.state.write().map_err(|_| lock_poisoned())?;
        let (next, events) = reduce(&guard, command)?;
        let next = Arc::new(next);
        *guard = Arc::clone(&next);
        drop(guard);

        debug!("Applied {} command, emitting {} events", name, events.len());
        self.event_sink.emit_batch(events);
        Ok(next)
    }

    pub fn snapshot(&self) -> Result<Arc<AppState>> {
        let guard = self.state.read().map_err(|_| lock_poisoned())?;
        Ok(Arc::clone(&guard))
    }

    pub fn portfolio_metrics(&self) -> Result<PortfolioMetrics> {
        let state = self.snapshot()?;
        Ok(calculate_portfolio_metrics(
            &state.assets,
            &state.investment_goals,
        ))
    }

    pub fn plan_contribution(&self, amount: f64) -> Result<Vec<ContributionSuggestion>> {
        let state = self.snapshot()?;
        let suggestions = plan_contribution(&state.assets, &state.investment_goals, amount);
        info!(
            "Planned contribution of {:.2} across {} assets",
            amount,
            suggestions.len()
        );
        Ok(suggestions)
    }

    pub fn adherence_score(&self) -> Result<u32> {
        let state = self.snapshot()?;
        Ok(calculate_adherence_score(
            &state.assets,
            &state.investment_goals,
        ))
    }

    pub fn portfolio_deficit(&self) -> Result<f64> {
        let state = self.snapshot()?;
        Ok(calculate_portfolio_deficit(
            &state.assets,
            &state.investment_goals,
        ))
    }

    pub fn diagnostics(&self) -> Result<PortfolioDiagnostics> {
        let state = self.snapshot()?;
        Ok(diagnose_portfolio(&state.assets, &state.investment_goals))
    }

    pub fn dividend_summary(&self, filter: &DividendFilter) -> Result<DividendSummary> {
        let state = self.snapshot()?;
        Ok(DividendSummary::from_dividends(
            filter.apply(&state.dividends),
        ))
    }
}

fn lock_poisoned() -> Error {
    Error::Unexpected("Application state lock poisoned".to_string())
}
