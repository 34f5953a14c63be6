// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tier-aware rendering of elapsed time into display strings.
//!
//! Unit labels arrive already localized and are passed through verbatim.

use crate::elapsed::ElapsedDuration;
use crate::tier::DisplayTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pre-localized unit strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitLabels {
    /// Day label used for a count of one (or zero).
    pub day: String,
    /// Day label used for counts above one.
    pub days: String,
    pub hours_abbrev: String,
    pub minutes_abbrev: String,
    pub seconds_abbrev: String,
}

impl Default for UnitLabels {
    fn default() -> Self {
        Self {
            day: "day".to_string(),
            days: "days".to_string(),
            hours_abbrev: "h".to_string(),
            minutes_abbrev: "m".to_string(),
            seconds_abbrev: "s".to_string(),
        }
    }
}

impl UnitLabels {
    /// Singular label unless `days > 1`.
    pub fn day_label(&self, days: u64) -> &str {
        if days > 1 {
            &self.days
        } else {
            &self.day
        }
    }
}

/// Caller opt-ins beyond the reference rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Append seconds at the hours and minutes tiers. Ignored at `Days`.
    pub show_seconds: bool,
}

/// Rendered text for one tier: the headline value and, for `Days`, the
/// hours/minutes line shown beneath it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierText {
    pub primary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

impl fmt::Display for TierText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.secondary {
            Some(secondary) => write!(f, "{} ({})", self.primary, secondary),
            None => f.write_str(&self.primary),
        }
    }
}

/// Render `d` at `tier` with the reference rules (never any seconds).
pub fn format_tier(tier: DisplayTier, d: &ElapsedDuration, labels: &UnitLabels) -> TierText {
    format_tier_with(tier, d, labels, FormatOptions::default())
}

/// Render `d` at `tier`, honoring `options`.
pub fn format_tier_with(
    tier: DisplayTier,
    d: &ElapsedDuration,
    labels: &UnitLabels,
    options: FormatOptions,
) -> TierText {
    let hours_minutes = format!(
        "{}{} {}{}",
        d.hours, labels.hours_abbrev, d.minutes, labels.minutes_abbrev
    );

    match tier {
        DisplayTier::Days => TierText {
            primary: format!("{} {}", d.days, labels.day_label(d.days)),
            secondary: Some(hours_minutes),
        },
        DisplayTier::HoursMinutes => TierText {
            primary: with_seconds(hours_minutes, d, labels, options),
            secondary: None,
        },
        DisplayTier::MinutesOnly => TierText {
            primary: with_seconds(
                format!("{}{}", d.minutes, labels.minutes_abbrev),
                d,
                labels,
                options,
            ),
            secondary: None,
        },
    }
}

fn with_seconds(
    text: String,
    d: &ElapsedDuration,
    labels: &UnitLabels,
    options: FormatOptions,
) -> String {
    if options.show_seconds {
        format!("{} {}{}", text, d.seconds, labels.seconds_abbrev)
    } else {
        text
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
