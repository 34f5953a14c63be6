// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single entry point hosts call on every refresh.

use crate::accountability::AccountabilityView;
use crate::deep_link::DeepLink;
use crate::kind::WidgetKind;
use crate::state::{AccountabilityState, StoredStreakState};
use crate::streak::StreakView;
use serde::{Deserialize, Serialize};
use streak_core::{EpochMs, FormatOptions, UnitLabels};
use streak_storage::PreferenceReader;
use tracing::debug;

/// Tap-only widgets (pledge, panic, quick meditation) carry no data;
/// they exist to open the app at the right place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionView {
    pub kind: WidgetKind,
    pub link: DeepLink,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widget", content = "view", rename_all = "snake_case")]
pub enum WidgetView {
    Streak(StreakView),
    Accountability(AccountabilityView),
    Action(ActionView),
}

impl WidgetView {
    pub fn link(&self) -> DeepLink {
        match self {
            WidgetView::Streak(_) => WidgetKind::Streak.link(),
            WidgetView::Accountability(_) => WidgetKind::Accountability.link(),
            WidgetView::Action(action) => action.link,
        }
    }
}

/// Read what `kind` needs from `prefs` and build its view.
///
/// Never fails: missing or malformed preferences fall back to defaults.
pub fn render_widget<R: PreferenceReader + ?Sized>(
    kind: WidgetKind,
    prefs: &R,
    labels: &UnitLabels,
    now: EpochMs,
    options: FormatOptions,
) -> WidgetView {
    debug!(%kind, now, "rendering widget");
    match kind {
        WidgetKind::Streak => {
            let state = StoredStreakState::read(prefs);
            WidgetView::Streak(StreakView::render_with(&state, labels, now, options))
        }
        WidgetKind::Accountability => {
            WidgetView::Accountability(AccountabilityView::render(&AccountabilityState::read(prefs)))
        }
        WidgetKind::Pledge | WidgetKind::Panic | WidgetKind::QuickMeditation => {
            WidgetView::Action(ActionView {
                kind,
                link: kind.link(),
            })
        }
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
