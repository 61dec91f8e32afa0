//! Store module - the application state, the commands that change it, and the
//! owning store that applies them and emits events.

mod app_store;
mod store_model;
mod store_reducer;


pub use app_store::AppStore;
pub use store_model::{AppState, StoreCommand};
pub use store_reducer::reduce;
