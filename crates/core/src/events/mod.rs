//! Store events module.
//!
//! Provides the event types and the sink trait the store emits through after
//! each applied command. The persistence layer implements the sink.

mod sink;
mod store_event;

pub use sink::*;
pub use store_event::*;
