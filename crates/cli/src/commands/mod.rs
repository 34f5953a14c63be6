// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod elapsed;
pub mod link;
pub mod refresh;
pub mod render;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use streak_core::{Clock, EpochMs, UnitLabels};
use streak_storage::PreferenceFile;

use crate::output::OutputFormat;

/// Everything a command needs from the environment.
pub struct Context {
    pub format: OutputFormat,
    pub prefs_path: PathBuf,
    pub labels: UnitLabels,
    pub clock: Box<dyn Clock>,
}

impl Context {
    /// An explicit `--now` wins over the clock.
    pub fn now(&self, explicit: Option<EpochMs>) -> EpochMs {
        explicit.unwrap_or_else(|| self.clock.epoch_ms())
    }

    pub fn load_prefs(&self) -> Result<PreferenceFile> {
        PreferenceFile::load(&self.prefs_path).with_context(|| {
            format!("failed to load preferences from {}", self.prefs_path.display())
        })
    }
}
