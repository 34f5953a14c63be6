// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! streak-core: elapsed-time math shared by every home-screen widget
//!
//! Every widget surface derives what it displays from a single stored
//! streak start instant. This crate owns that derivation so all surfaces
//! agree on the numbers for the same `(start, now)` pair.

pub mod clock;
pub mod elapsed;
pub mod format;
pub mod tier;

pub use clock::{Clock, EpochMs, SystemClock};
#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use elapsed::{compute_elapsed, ElapsedDuration};
pub use format::{format_tier, format_tier_with, FormatOptions, TierText, UnitLabels};
pub use tier::{select_tier, DisplayTier};
