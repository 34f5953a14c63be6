// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

/// A single stored preference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl PreferenceValue {
    /// Convert a JSON scalar. Null, arrays, and objects have no
    /// preference equivalent.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float)),
            Value::String(s) => Some(Self::Str(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// JSON form for writing back. Non-finite floats have none and
    /// become null.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Str(s) => Value::String(s.clone()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view, coercing the way the platform stores do: floats
    /// truncate toward zero, numeric strings parse.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Self::Str(s) => s.trim().parse().ok(),
            Self::Bool(b) => Some(i64::from(*b)),
            Self::Float(_) => None,
        }
    }

    /// Boolean view; numbers are true when non-zero.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(i) => Some(*i != 0),
            Self::Float(f) => Some(*f != 0.0),
            Self::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
        }
    }
}

impl From<bool> for PreferenceValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for PreferenceValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for PreferenceValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for PreferenceValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for PreferenceValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PreferenceValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Read-only view of the shared preference store.
///
/// Implementors supply [`value`](Self::value); the typed getters coerce
/// on top of it. A value of the wrong shape reads as absent.
pub trait PreferenceReader {
    fn value(&self, key: &str) -> Option<PreferenceValue>;

    fn string(&self, key: &str) -> Option<String> {
        match self.value(key)? {
            PreferenceValue::Str(s) => Some(s),
            _ => None,
        }
    }

    fn integer(&self, key: &str) -> Option<i64> {
        self.value(key)?.as_i64()
    }

    fn boolean(&self, key: &str) -> Option<bool> {
        self.value(key)?.as_bool()
    }

    fn string_or(&self, key: &str, default: &str) -> String {
        self.string(key).unwrap_or_else(|| default.to_string())
    }

    fn integer_or(&self, key: &str, default: i64) -> i64 {
        self.integer(key).unwrap_or(default)
    }

    fn boolean_or(&self, key: &str, default: bool) -> bool {
        self.boolean(key).unwrap_or(default)
    }
}

impl<T: PreferenceReader + ?Sized> PreferenceReader for &T {
    fn value(&self, key: &str) -> Option<PreferenceValue> {
        (**self).value(key)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
