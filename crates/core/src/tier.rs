// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display tier selection: how coarse a widget renders elapsed time.

use crate::elapsed::ElapsedDuration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolution a widget renders elapsed time at, coarsest first.
///
/// Ordering follows elapsed time: `MinutesOnly < HoursMinutes < Days`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayTier {
    MinutesOnly,
    HoursMinutes,
    Days,
}

impl DisplayTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayTier::MinutesOnly => "minutes_only",
            DisplayTier::HoursMinutes => "hours_minutes",
            DisplayTier::Days => "days",
        }
    }
}

impl fmt::Display for DisplayTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the tier for `d`: any whole day wins, then any whole hour,
/// otherwise minutes.
pub fn select_tier(d: &ElapsedDuration) -> DisplayTier {
    if d.days > 0 {
        DisplayTier::Days
    } else if d.hours > 0 {
        DisplayTier::HoursMinutes
    } else {
        DisplayTier::MinutesOnly
    }
}

#[cfg(test)]
#[path = "tier_tests.rs"]
mod tests;
