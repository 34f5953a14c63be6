// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `streak refresh` - Next refresh instant a widget asks its host for

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use streak_core::EpochMs;
use streak_widgets::{RefreshPolicy, WidgetKind};

use super::Context;
use crate::output::{print_json, OutputFormat};
use crate::time_arg::{format_instant, parse_instant};

#[derive(Args, Debug)]
pub struct RefreshArgs {
    /// Widget kind
    pub kind: WidgetKind,

    /// Evaluation instant (epoch ms or RFC 3339). Defaults to now.
    #[arg(long, value_parser = parse_instant)]
    pub now: Option<EpochMs>,
}

#[derive(Debug, Serialize)]
struct RefreshReport {
    kind: WidgetKind,
    host_kind: &'static str,
    #[serde(flatten)]
    policy: RefreshPolicy,
}

pub fn handle(args: RefreshArgs, ctx: &Context) -> Result<()> {
    let policy = RefreshPolicy::for_kind(args.kind, ctx.now(args.now));
    let report = RefreshReport {
        kind: args.kind,
        host_kind: args.kind.host_kind(),
        policy,
    };

    match ctx.format {
        OutputFormat::Text => println!(
            "{}: refresh after {} ({})",
            report.host_kind,
            format_instant(policy.at_ms()),
            policy.at_ms()
        ),
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}
