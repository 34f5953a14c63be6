// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `streak link` / `streak open` - Widget tap deep links

use anyhow::{Context as _, Result};
use serde::Serialize;
use streak_widgets::{DeepLink, PendingNavigation};
use tracing::info;

use super::Context;
use crate::output::{print_json, OutputFormat};

#[derive(Debug, Serialize)]
struct LinkReport {
    target: DeepLink,
    uri: String,
    opens_app_home: bool,
}

pub fn handle_link(uri: &str, ctx: &Context) -> Result<()> {
    let link = DeepLink::parse(uri)?;
    let report = LinkReport {
        target: link,
        uri: link.uri(),
        opens_app_home: link.opens_app_home(),
    };

    match ctx.format {
        OutputFormat::Text => {
            println!("target: {}", link.target());
            println!("uri:    {}", report.uri);
        }
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct OpenReport {
    target: DeepLink,
    recorded: bool,
}

/// Record the navigation a widget tap leaves for the app's next launch.
pub fn handle_open(uri: &str, ctx: &Context) -> Result<()> {
    let link = DeepLink::parse(uri)?;

    let recorded = match PendingNavigation::from_link(link) {
        Some(pending) => {
            let mut prefs = ctx.load_prefs()?;
            pending.apply(prefs.prefs_mut());
            prefs.save().with_context(|| {
                format!("failed to save preferences to {}", prefs.path().display())
            })?;
            info!(%link, path = %prefs.path().display(), "recorded pending navigation");
            true
        }
        None => false,
    };

    match ctx.format {
        OutputFormat::Text => {
            if recorded {
                println!("Recorded pending navigation to {}", link.target());
            } else {
                println!("{} opens directly, nothing recorded", link);
            }
        }
        OutputFormat::Json => print_json(&OpenReport {
            target: link,
            recorded,
        })?,
    }
    Ok(())
}
