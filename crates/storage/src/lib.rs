// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Read access to the key-value store the app shares with its widgets.
//!
//! The main app owns these values; widget code only reads them through
//! [`PreferenceReader`]. [`PreferenceFile`] is a JSON-on-disk stand-in for
//! the platform stores.

pub mod keys;
mod file;
mod memory;
mod value;

pub use file::{PreferenceError, PreferenceFile};
pub use memory::MemoryPreferences;
pub use value::{PreferenceReader, PreferenceValue};
