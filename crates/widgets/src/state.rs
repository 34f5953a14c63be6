// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Widget inputs as stored by the main app.
//!
//! Each reader applies the same fallbacks the platform widgets use, so a
//! missing or mistyped key still produces something displayable.

use serde::{Deserialize, Serialize};
use streak_core::{compute_elapsed, ElapsedDuration, EpochMs};
use streak_storage::{keys, PreferenceReader};
use tracing::debug;

pub const DEFAULT_STREAK_LABEL: &str = "Sugar-free since:";
pub const DEFAULT_SUBSCRIBE_PROMPT: &str = "Subscribe to\ntrack your streak";
pub const DEFAULT_MY_NAME: &str = "Me";
pub const DEFAULT_PARTNER_NAME: &str = "Partner";
pub const DEFAULT_ACCOUNTABILITY_TITLE: &str = "RECOVERY";
pub const DEFAULT_DAYS_SUFFIX: &str = "Days";

/// Streak inputs. Written by the app when the streak resets or the
/// subscription changes; never written by widgets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredStreakState {
    /// Streak start, absent until the app records one.
    pub start: Option<EpochMs>,
    pub has_active_subscription: bool,
    pub label: String,
    pub subscribe_prompt: String,
}

impl Default for StoredStreakState {
    fn default() -> Self {
        Self {
            start: None,
            has_active_subscription: false,
            label: DEFAULT_STREAK_LABEL.to_string(),
            subscribe_prompt: DEFAULT_SUBSCRIBE_PROMPT.to_string(),
        }
    }
}

impl StoredStreakState {
    /// Read the streak keys. A start of zero or below means "no streak".
    pub fn read<R: PreferenceReader + ?Sized>(prefs: &R) -> Self {
        let start = prefs
            .integer(keys::STREAK_START_TIMESTAMP)
            .filter(|ms| *ms > 0)
            .map(|ms| ms as EpochMs);
        let has_active_subscription = prefs.boolean_or(keys::HAS_ACTIVE_SUBSCRIPTION, false);

        debug!(?start, has_active_subscription, "read streak state");

        Self {
            start,
            has_active_subscription,
            label: prefs.string_or(keys::STREAK_LABEL, DEFAULT_STREAK_LABEL),
            subscribe_prompt: prefs.string_or(keys::SUBSCRIBE_PROMPT, DEFAULT_SUBSCRIBE_PROMPT),
        }
    }

    pub fn elapsed(&self, now: EpochMs) -> ElapsedDuration {
        compute_elapsed(self.start, now)
    }
}

/// One side of the accountability widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantState {
    pub name: String,
    pub days: i64,
    pub percentage: i64,
}

/// Accountability inputs: the user and their partner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountabilityState {
    pub has_partner: bool,
    pub me: ParticipantState,
    pub partner: ParticipantState,
    pub title: String,
    pub days_suffix: String,
}

impl AccountabilityState {
    pub fn read<R: PreferenceReader + ?Sized>(prefs: &R) -> Self {
        let has_partner = prefs.boolean_or(keys::ACCOUNTABILITY_HAS_PARTNER, false);
        debug!(has_partner, "read accountability state");

        Self {
            has_partner,
            me: ParticipantState {
                name: prefs.string_or(keys::ACCOUNTABILITY_MY_NAME, DEFAULT_MY_NAME),
                days: prefs.integer_or(keys::ACCOUNTABILITY_MY_DAYS, 0),
                percentage: prefs.integer_or(keys::ACCOUNTABILITY_MY_PERCENTAGE, 0),
            },
            partner: ParticipantState {
                name: prefs.string_or(keys::ACCOUNTABILITY_PARTNER_NAME, DEFAULT_PARTNER_NAME),
                days: prefs.integer_or(keys::ACCOUNTABILITY_PARTNER_DAYS, 0),
                percentage: prefs.integer_or(keys::ACCOUNTABILITY_PARTNER_PERCENTAGE, 0),
            },
            title: prefs.string_or(keys::ACCOUNTABILITY_TITLE, DEFAULT_ACCOUNTABILITY_TITLE),
            days_suffix: prefs.string_or(keys::ACCOUNTABILITY_DAYS_SUFFIX, DEFAULT_DAYS_SUFFIX),
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
