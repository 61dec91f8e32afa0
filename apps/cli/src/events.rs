//! Store event sink for the command-line front end.
//!
//! Collects events emitted while a command runs so the caller knows whether the
//! state file has to be rewritten before exiting.

use std::sync::{Arc, Mutex};

use carteira_core::events::{StoreEvent, StoreEventSink};

#[derive(Clone, Default)]
pub struct SnapshotEventSink {
    pending: Arc<Mutex<Vec<StoreEvent>>>,
}

impl SnapshotEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the collected events.
    pub fn take_pending(&self) -> Vec<StoreEvent> {
        match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl StoreEventSink for SnapshotEventSink {
    fn emit(&self, event: StoreEvent) {
        tracing::debug!("Store event: {:?}", event);
        match self.pending.lock() {
            Ok(mut pending) => pending.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
