//! Portfolio module - calculations over the asset and goal collections.

pub mod rebalancing;
