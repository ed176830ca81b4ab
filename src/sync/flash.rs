//! Active flash tracking
//!
//! A flash is transient: it fires when a price moves and clears after a
//! fixed duration. The tracker keeps the active set with deadlines so the
//! controller can sweep expired entries and emit `ClearFlash` patches.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::view::FlashDirection;

#[derive(Debug, Clone, Copy)]
struct FlashEntry {
    direction: FlashDirection,
    deadline: Instant,
}

/// Active flashes by symbol
#[derive(Debug, Default)]
pub struct FlashTracker {
    active: HashMap<String, FlashEntry>,
}

impl FlashTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fired flash; a refire on the same symbol resets the deadline
    pub fn fire(&mut self, symbol: String, direction: FlashDirection, now: Instant, ttl: Duration) {
        self.active.insert(
            symbol,
            FlashEntry {
                direction,
                deadline: now + ttl,
            },
        );
    }

    /// Remove and return the symbols whose flash has expired
    pub fn sweep(&mut self, now: Instant) -> Vec<String> {
        let expired: Vec<String> = self
            .active
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .map(|(symbol, _)| symbol.clone())
            .collect();
        for symbol in &expired {
            self.active.remove(symbol);
        }
        expired
    }

    pub fn is_active(&self, symbol: &str) -> bool {
        self.active.contains_key(symbol)
    }

    pub fn direction(&self, symbol: &str) -> Option<FlashDirection> {
        self.active.get(symbol).map(|e| e.direction)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
