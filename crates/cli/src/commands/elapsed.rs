// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `streak elapsed` - Elapsed time, tier, and display text

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use streak_core::{
    compute_elapsed, format_tier_with, select_tier, DisplayTier, ElapsedDuration, EpochMs,
    FormatOptions, TierText,
};
use streak_widgets::StoredStreakState;

use super::Context;
use crate::output::{print_json, OutputFormat};
use crate::time_arg::{format_instant, parse_instant};

#[derive(Args, Debug)]
pub struct ElapsedArgs {
    /// Streak start (epoch ms or RFC 3339). Defaults to the stored start.
    #[arg(long, value_parser = parse_instant)]
    pub start: Option<EpochMs>,

    /// Evaluation instant (epoch ms or RFC 3339). Defaults to now.
    #[arg(long, value_parser = parse_instant)]
    pub now: Option<EpochMs>,

    /// Include seconds at the hours and minutes tiers
    #[arg(long)]
    pub seconds: bool,
}

#[derive(Debug, Serialize)]
pub struct ElapsedReport {
    pub start_ms: Option<EpochMs>,
    pub now_ms: EpochMs,
    pub elapsed: ElapsedDuration,
    pub tier: DisplayTier,
    pub text: TierText,
}

impl ElapsedReport {
    pub fn build(
        start: Option<EpochMs>,
        now: EpochMs,
        ctx: &Context,
        options: FormatOptions,
    ) -> Self {
        let elapsed = compute_elapsed(start, now);
        let tier = select_tier(&elapsed);
        Self {
            start_ms: start,
            now_ms: now,
            elapsed,
            tier,
            text: format_tier_with(tier, &elapsed, &ctx.labels, options),
        }
    }
}

pub fn handle(args: ElapsedArgs, ctx: &Context) -> Result<()> {
    let start = match args.start {
        Some(start) => Some(start),
        None => StoredStreakState::read(&ctx.load_prefs()?).start,
    };
    let now = ctx.now(args.now);
    let options = FormatOptions {
        show_seconds: args.seconds,
    };

    let report = ElapsedReport::build(start, now, ctx, options);

    match ctx.format {
        OutputFormat::Text => {
            let d = &report.elapsed;
            let start = report
                .start_ms
                .map(format_instant)
                .unwrap_or_else(|| "none".to_string());
            println!("start:   {}", start);
            println!("now:     {}", format_instant(report.now_ms));
            println!(
                "elapsed: {}d {}h {}m {}s",
                d.days, d.hours, d.minutes, d.seconds
            );
            println!("tier:    {}", report.tier);
            println!("display: {}", report.text);
        }
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}
