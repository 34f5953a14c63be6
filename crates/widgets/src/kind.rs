// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The widget catalogue.

use crate::deep_link::DeepLink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown widget `{0}` (expected one of: streak, accountability, pledge, panic, meditation)")]
pub struct WidgetKindError(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Streak,
    Accountability,
    Pledge,
    Panic,
    QuickMeditation,
}

impl WidgetKind {
    /// All widgets, in bundle order.
    pub const ALL: [WidgetKind; 5] = [
        WidgetKind::Streak,
        WidgetKind::Accountability,
        WidgetKind::Pledge,
        WidgetKind::Panic,
        WidgetKind::QuickMeditation,
    ];

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Streak => "streak",
            WidgetKind::Accountability => "accountability",
            WidgetKind::Pledge => "pledge",
            WidgetKind::Panic => "panic",
            WidgetKind::QuickMeditation => "meditation",
        }
    }

    /// Identifier the widget is registered under with the host.
    pub fn host_kind(&self) -> &'static str {
        match self {
            WidgetKind::Streak => "StreakWidget",
            WidgetKind::Accountability => "AccountabilityWidget",
            WidgetKind::Pledge => "PledgeWidget",
            WidgetKind::Panic => "PanicWidget",
            WidgetKind::QuickMeditation => "QuickMeditationWidget",
        }
    }

    /// Where a tap on the widget goes.
    pub fn link(&self) -> DeepLink {
        match self {
            WidgetKind::Streak => DeepLink::Home,
            WidgetKind::Accountability => DeepLink::Accountability,
            WidgetKind::Pledge => DeepLink::Pledge,
            WidgetKind::Panic => DeepLink::Panic,
            WidgetKind::QuickMeditation => DeepLink::Meditation,
        }
    }

    /// How long the host should wait before asking for a fresh view.
    ///
    /// The streak counter is the only time-driven widget; the app pushes
    /// explicit reloads for everything else.
    pub fn refresh_interval(&self) -> Duration {
        match self {
            WidgetKind::Streak => Duration::from_secs(5 * 60),
            _ => Duration::from_secs(15 * 60),
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WidgetKind {
    type Err = WidgetKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        WidgetKind::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(s) || kind.host_kind().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| WidgetKindError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
