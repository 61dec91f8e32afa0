//! Store event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::StoreEvent;

/// Receives store events after successful mutations.
///
/// `emit()` must be fast and non-blocking. Failing to deliver an event must not
/// affect the state change that produced it.
pub trait StoreEventSink: Send + Sync {
    /// Emit a single store event.
    fn emit(&self, event: StoreEvent);

    /// Emit multiple store events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<StoreEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpStoreEventSink;

impl StoreEventSink for NoOpStoreEventSink {
    fn emit(&self, _event: StoreEvent) {}
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockStoreEventSink {
    events: Arc<Mutex<Vec<StoreEvent>>>,
}

impl MockStoreEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl StoreEventSink for MockStoreEventSink {
    fn emit(&self, event: StoreEvent) {
        self.events.lock().unwrap().push(event);
    }
}
