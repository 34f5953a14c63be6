// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction so "now" is always an explicit input.

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, the unit the shared preference
/// stores use for timestamps.
pub type EpochMs = u64;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Current time in epoch milliseconds.
    fn epoch_ms(&self) -> EpochMs;
}

/// Reads the host wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_ms(&self) -> EpochMs {
        // A clock set before 1970 reads as the epoch itself
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as EpochMs
    }
}

/// Manually driven clock for tests. Clones share the same time.
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone, Debug, Default)]
pub struct FakeClock {
    now: std::sync::Arc<parking_lot::Mutex<EpochMs>>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(epoch_ms: EpochMs) -> Self {
        let clock = Self::new();
        clock.set_epoch_ms(epoch_ms);
        clock
    }

    pub fn set_epoch_ms(&self, epoch_ms: EpochMs) {
        *self.now.lock() = epoch_ms;
    }

    pub fn advance(&self, by: std::time::Duration) {
        let mut now = self.now.lock();
        *now = now.saturating_add(by.as_millis() as EpochMs);
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Clock for FakeClock {
    fn epoch_ms(&self) -> EpochMs {
        *self.now.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
