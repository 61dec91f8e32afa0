//! Assets module - holdings and watchlist entries.

mod assets_constants;
mod assets_model;

#[cfg(test)]
mod assets_model_tests;

pub use assets_constants::*;
pub use assets_model::{Asset, NewAsset};
