//! Carteira Core - portfolio rebalancing and contribution planning.
//!
//! Holds the domain models (assets, class goals, dividends), the pure
//! rebalancing engine that turns a state snapshot into metrics, contribution
//! plans and diagnostics, and the store that owns the state and emits events
//! when it changes. Persistence is left to callers through the event sink.

pub mod assets;
pub mod constants;
pub mod dividends;
pub mod errors;
pub mod events;
pub mod goals;
pub mod portfolio;
pub mod store;

// Re-export common types from asset and portfolio modules
pub use assets::*;
pub use portfolio::rebalancing::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
