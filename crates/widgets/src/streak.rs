// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Streak counter widget.

use crate::state::StoredStreakState;
use serde::{Deserialize, Serialize};
use streak_core::{
    format_tier_with, select_tier, DisplayTier, ElapsedDuration, EpochMs, FormatOptions,
    TierText, UnitLabels,
};

/// What the streak widget shows for one refresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StreakView {
    /// Subscribers see the running counter.
    Counter {
        label: String,
        tier: DisplayTier,
        text: TierText,
        elapsed: ElapsedDuration,
    },
    /// Everyone else sees the subscribe prompt.
    Locked { prompt: String },
}

impl StreakView {
    pub fn render(state: &StoredStreakState, labels: &UnitLabels, now: EpochMs) -> Self {
        Self::render_with(state, labels, now, FormatOptions::default())
    }

    pub fn render_with(
        state: &StoredStreakState,
        labels: &UnitLabels,
        now: EpochMs,
        options: FormatOptions,
    ) -> Self {
        if !state.has_active_subscription {
            return StreakView::Locked {
                prompt: state.subscribe_prompt.clone(),
            };
        }

        let elapsed = state.elapsed(now);
        let tier = select_tier(&elapsed);
        StreakView::Counter {
            label: state.label.clone(),
            tier,
            text: format_tier_with(tier, &elapsed, labels, options),
            elapsed,
        }
    }
}

#[cfg(test)]
#[path = "streak_tests.rs"]
mod tests;
