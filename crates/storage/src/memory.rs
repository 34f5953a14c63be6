// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::value::{PreferenceReader, PreferenceValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// In-memory preference map, ordered by key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryPreferences {
    values: BTreeMap<String, PreferenceValue>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PreferenceValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PreferenceValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<PreferenceValue> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PreferenceValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PreferenceReader for MemoryPreferences {
    fn value(&self, key: &str) -> Option<PreferenceValue> {
        self.values.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<PreferenceValue>> FromIterator<(K, V)> for MemoryPreferences {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |prefs, (key, value)| prefs.with(key, value))
    }
}
