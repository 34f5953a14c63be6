// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! streak-widgets: what each home-screen widget shows
//!
//! Widgets read the shared preferences, run the elapsed-time math from
//! `streak-core`, and produce a view model. Hosts turn view models into
//! platform views; nothing here knows about layout.

pub mod accountability;
pub mod deep_link;
pub mod kind;
pub mod refresh;
pub mod state;
pub mod streak;
pub mod view;

pub use accountability::{AccountabilityView, PartnerCard};
pub use deep_link::{DeepLink, DeepLinkError, PendingNavigation};
pub use kind::{WidgetKind, WidgetKindError};
pub use refresh::RefreshPolicy;
pub use state::{AccountabilityState, ParticipantState, StoredStreakState};
pub use streak::StreakView;
pub use view::{render_widget, ActionView, WidgetView};
