//! Report pipeline statistics tracking.
//!
//! This module provides thread-safe counters for the events of the report
//! pipeline (cache hits, probe calls, AI fallbacks, builder invocations).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::EventType;

/// Thread-safe pipeline statistics tracker.
///
/// Every `EventType` is initialized to zero on creation, so lookups never miss.
/// Share across tasks with `Arc`.
#[derive(Debug)]
pub struct ServiceStats {
    events: HashMap<EventType, AtomicUsize>,
}

impl Default for ServiceStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceStats {
    pub fn new() -> Self {
        let mut events = HashMap::new();
        for event in EventType::iter() {
            events.insert(event, AtomicUsize::new(0));
        }
        ServiceStats { events }
    }

    /// Increment an event counter.
    pub fn increment(&self, event: EventType) {
        if let Some(counter) = self.events.get(&event) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in ServiceStats initialization.",
                event
            );
        }
    }

    /// Get the count for an event type.
    pub fn get_count(&self, event: EventType) -> usize {
        self.events
            .get(&event)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of `get_report` calls that got past normalization.
    pub fn total_requests(&self) -> usize {
        self.get_count(EventType::CacheHit) + self.get_count(EventType::CacheMiss)
    }

    /// Snapshot of all non-zero counters, in declaration order.
    pub fn non_zero(&self) -> Vec<(EventType, usize)> {
        EventType::iter()
            .map(|e| (e, self.get_count(e)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
