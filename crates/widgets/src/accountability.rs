// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Accountability widget: the user's recovery next to their partner's.

use crate::state::{AccountabilityState, ParticipantState};
use serde::{Deserialize, Serialize};

/// One recovery ring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartnerCard {
    pub name: String,
    /// e.g. `"12 Days"`
    pub days_text: String,
    /// e.g. `"13%"`
    pub percentage_text: String,
    /// Ring fill, always within `0.0..=1.0`.
    pub progress: f64,
}

impl PartnerCard {
    fn new(participant: &ParticipantState, days_suffix: &str) -> Self {
        Self {
            name: participant.name.clone(),
            days_text: format!("{} {}", participant.days, days_suffix),
            percentage_text: format!("{}%", participant.percentage),
            progress: (participant.percentage as f64 / 100.0).clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AccountabilityView {
    /// Invite the user to find a partner first.
    NoPartner,
    Partners {
        /// Upper-cased title shown inside each ring.
        title: String,
        me: PartnerCard,
        partner: PartnerCard,
    },
}

impl AccountabilityView {
    pub fn render(state: &AccountabilityState) -> Self {
        if !state.has_partner {
            return AccountabilityView::NoPartner;
        }

        AccountabilityView::Partners {
            title: state.title.to_uppercase(),
            me: PartnerCard::new(&state.me, &state.days_suffix),
            partner: PartnerCard::new(&state.partner, &state.days_suffix),
        }
    }
}

#[cfg(test)]
#[path = "accountability_tests.rs"]
mod tests;
