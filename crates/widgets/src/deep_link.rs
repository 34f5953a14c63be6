// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stoppr://` tap targets.
//!
//! Every widget opens the app through one of these links. Parsing accepts
//! both `stoppr://panic` (target in the host) and `stoppr:///panic`
//! (target in the path), case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use streak_storage::{keys, MemoryPreferences};
use thiserror::Error;

pub const SCHEME: &str = "stoppr";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeepLinkError {
    #[error("not a URI: `{0}`")]
    NotAUri(String),
    #[error("unsupported scheme `{0}`, expected `stoppr`")]
    WrongScheme(String),
    #[error("deep link has no target")]
    EmptyTarget,
    #[error("unknown deep link target `{0}`")]
    UnknownTarget(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeepLink {
    Home,
    Panic,
    Meditation,
    Pledge,
    Accountability,
}

impl DeepLink {
    pub fn target(&self) -> &'static str {
        match self {
            DeepLink::Home => "home",
            DeepLink::Panic => "panic",
            DeepLink::Meditation => "meditation",
            DeepLink::Pledge => "pledge",
            DeepLink::Accountability => "accountability",
        }
    }

    pub fn uri(&self) -> String {
        format!("{}://{}", SCHEME, self.target())
    }

    /// Targets the app launches to its home route and forwards from there.
    pub fn opens_app_home(&self) -> bool {
        !matches!(self, DeepLink::Accountability)
    }

    pub fn parse(uri: &str) -> Result<Self, DeepLinkError> {
        let uri = uri.trim();
        let (scheme, rest) = uri
            .split_once("://")
            .or_else(|| uri.split_once(':'))
            .ok_or_else(|| DeepLinkError::NotAUri(uri.to_string()))?;

        if !scheme.eq_ignore_ascii_case(SCHEME) {
            return Err(DeepLinkError::WrongScheme(scheme.to_string()));
        }

        // Drop query and fragment; only the target matters
        let rest = rest.split(['?', '#']).next().unwrap_or_default();

        let (host, path) = match rest.split_once('/') {
            Some((host, path)) => (host, path),
            None => (rest, ""),
        };

        let target = if host.is_empty() {
            path.trim_matches('/')
        } else {
            host
        }
        .to_ascii_lowercase();

        match target.as_str() {
            "" => Err(DeepLinkError::EmptyTarget),
            "home" => Ok(DeepLink::Home),
            "panic" => Ok(DeepLink::Panic),
            "meditation" => Ok(DeepLink::Meditation),
            "pledge" => Ok(DeepLink::Pledge),
            "accountability" => Ok(DeepLink::Accountability),
            _ => Err(DeepLinkError::UnknownTarget(target)),
        }
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", SCHEME, self.target())
    }
}

impl FromStr for DeepLink {
    type Err = DeepLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Navigation the app picks up on its next launch after a widget tap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingNavigation {
    pub target: DeepLink,
}

impl PendingNavigation {
    /// `None` for links the app routes without parking them.
    pub fn from_link(link: DeepLink) -> Option<Self> {
        link.opens_app_home().then_some(Self { target: link })
    }

    pub fn apply(&self, prefs: &mut MemoryPreferences) {
        prefs.set(keys::PENDING_HOME_NAVIGATION, true);
        prefs.set(keys::PENDING_WIDGET_DEEPLINK, self.target.target());
        prefs.set(keys::FORCE_KEEP_WELCOME_VIDEO, true);
    }
}

#[cfg(test)]
#[path = "deep_link_tests.rs"]
mod tests;
