// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! When a widget asks its host for the next refresh.
//!
//! The host owns the actual schedule and may defer past this instant.

use crate::kind::WidgetKind;
use serde::{Deserialize, Serialize};
use streak_core::EpochMs;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", content = "at_ms", rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Refresh no earlier than this instant.
    After(EpochMs),
}

impl RefreshPolicy {
    pub fn for_kind(kind: WidgetKind, now: EpochMs) -> Self {
        let interval = kind.refresh_interval().as_millis() as EpochMs;
        RefreshPolicy::After(now.saturating_add(interval))
    }

    pub fn at_ms(&self) -> EpochMs {
        match self {
            RefreshPolicy::After(at) => *at,
        }
    }
}
