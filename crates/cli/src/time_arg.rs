// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Instant arguments: epoch milliseconds or RFC 3339.

use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use streak_core::EpochMs;

/// Parse `1746268800000` or `2025-05-03T10:40:00Z`.
pub fn parse_instant(value: &str) -> Result<EpochMs> {
    let value = value.trim();
    if value.is_empty() {
        bail!("invalid instant: empty value");
    }

    if value.chars().all(|c| c.is_ascii_digit()) {
        return value
            .parse::<EpochMs>()
            .map_err(|_| anyhow!("invalid instant: `{value}` is out of range"));
    }

    let parsed = DateTime::parse_from_rfc3339(value).map_err(|_| {
        anyhow!("invalid instant: expected epoch milliseconds or RFC 3339, got `{value}`")
    })?;
    let ms = parsed.timestamp_millis();
    if ms < 0 {
        bail!("invalid instant: `{value}` is before 1970");
    }
    Ok(ms as EpochMs)
}

/// RFC 3339 in UTC, or the raw number when it is out of chrono's range.
pub fn format_instant(ms: EpochMs) -> String {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| ms.to_string())
}
