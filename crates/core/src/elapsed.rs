// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Elapsed time since the streak start, split into whole units.

use crate::clock::EpochMs;
use serde::{Deserialize, Serialize};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Whole-unit elapsed time.
///
/// `hours`, `minutes`, and `seconds` are always below their carry limit
/// (24, 60, 60). There is no upper bound on `days`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElapsedDuration {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ElapsedDuration {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Split a number of whole seconds into days/hours/minutes/seconds.
    pub fn from_secs(secs: u64) -> Self {
        Self {
            days: secs / SECS_PER_DAY,
            hours: ((secs % SECS_PER_DAY) / SECS_PER_HOUR) as u32,
            minutes: ((secs % SECS_PER_HOUR) / SECS_PER_MINUTE) as u32,
            seconds: (secs % SECS_PER_MINUTE) as u32,
        }
    }

    /// Recombine into whole seconds (saturating for absurd day counts).
    pub fn total_seconds(&self) -> u64 {
        self.days
            .saturating_mul(SECS_PER_DAY)
            .saturating_add(u64::from(self.hours) * SECS_PER_HOUR)
            .saturating_add(u64::from(self.minutes) * SECS_PER_MINUTE)
            .saturating_add(u64::from(self.seconds))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Elapsed time from `start` to `now`.
///
/// An absent start, or a start later than `now`, yields [`ElapsedDuration::ZERO`].
/// Partial seconds are truncated.
pub fn compute_elapsed(start: Option<EpochMs>, now: EpochMs) -> ElapsedDuration {
    match start {
        Some(start) if start <= now => ElapsedDuration::from_secs((now - start) / 1000),
        _ => ElapsedDuration::ZERO,
    }
}

#[cfg(test)]
#[path = "elapsed_tests.rs"]
mod tests;
