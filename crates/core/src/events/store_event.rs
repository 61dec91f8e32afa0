//! Store event types.

use serde::{Deserialize, Serialize};

/// Facts about state changes, emitted by the store after a command is applied.
///
/// The persistence layer listens for these to know when the snapshot must be saved;
/// views use them to know which derived metrics to recompute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// Assets were created, updated, or deleted.
    AssetsChanged { asset_ids: Vec<String> },

    /// The class target set was replaced.
    InvestmentGoalsChanged,

    /// Dividends were recorded or removed. Lists the assets whose totals moved.
    DividendsChanged { asset_ids: Vec<String> },

    /// State was reset to defaults.
    StateReset,

    /// State was replaced by an imported snapshot.
    StateImported,
}
