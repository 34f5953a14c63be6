// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON preference file.
//!
//! The file is one JSON object owned by the main app. Scalars are exposed
//! as preferences; every other value is carried through untouched so a
//! save never loses keys the app wrote. A missing file is an empty store
//! so that widgets always have something to render.

use crate::memory::MemoryPreferences;
use crate::value::{PreferenceReader, PreferenceValue};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur loading or saving a preference file
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("preference file {} must contain a JSON object", .path.display())]
    NotAnObject { path: PathBuf },
}

/// Preferences backed by a JSON file.
#[derive(Clone, Debug)]
pub struct PreferenceFile {
    path: PathBuf,
    prefs: MemoryPreferences,
    /// Object as read from disk.
    raw: serde_json::Map<String, serde_json::Value>,
}

impl PreferenceFile {
    /// Load preferences from `path`.
    ///
    /// Returns an empty store if the file doesn't exist. Values with no
    /// preference equivalent (null, arrays, objects) are not readable but
    /// are kept for [`save`](Self::save).
    pub fn load(path: &Path) -> Result<Self, PreferenceError> {
        if !path.exists() {
            debug!(path = %path.display(), "no preference file, using empty store");
            return Ok(Self {
                path: path.to_path_buf(),
                prefs: MemoryPreferences::new(),
                raw: serde_json::Map::new(),
            });
        }

        let reader = BufReader::new(File::open(path)?);
        let root: serde_json::Value = serde_json::from_reader(reader)?;
        let serde_json::Value::Object(map) = root else {
            return Err(PreferenceError::NotAnObject {
                path: path.to_path_buf(),
            });
        };

        let mut prefs = MemoryPreferences::new();
        for (key, value) in &map {
            match PreferenceValue::from_json(value) {
                Some(value) => prefs.set(key.as_str(), value),
                None => debug!(
                    key = %key,
                    path = %path.display(),
                    "preference has no scalar value, keeping it as is",
                ),
            }
        }

        debug!(path = %path.display(), count = prefs.len(), "loaded preferences");
        Ok(Self {
            path: path.to_path_buf(),
            prefs,
            raw: map,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn prefs(&self) -> &MemoryPreferences {
        &self.prefs
    }

    pub fn prefs_mut(&mut self) -> &mut MemoryPreferences {
        &mut self.prefs
    }

    /// The object to write: what was read, with changed, added, and
    /// removed preferences applied. Untouched keys keep their exact JSON.
    fn merged(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut out = self.raw.clone();

        out.retain(|key, value| {
            PreferenceValue::from_json(value).is_none() || self.prefs.value(key).is_some()
        });

        for (key, value) in self.prefs.iter() {
            let unchanged = self
                .raw
                .get(key)
                .and_then(PreferenceValue::from_json)
                .is_some_and(|old| old == *value);
            if !unchanged {
                out.insert(key.to_string(), value.to_json());
            }
        }
        out
    }

    /// Save atomically (write to .tmp, then rename).
    pub fn save(&self) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("tmp");

        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &self.merged())?;
            writer.write_all(b"\n")?;
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

impl PreferenceReader for PreferenceFile {
    fn value(&self, key: &str) -> Option<PreferenceValue> {
        self.prefs.value(key)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
