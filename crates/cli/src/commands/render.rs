// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `streak render` - Build widget view models from the preference file

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use streak_core::{EpochMs, FormatOptions};
use streak_widgets::{render_widget, WidgetKind, WidgetView};

use super::Context;
use crate::output::{print_json, widget_lines, OutputFormat};
use crate::time_arg::parse_instant;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Widgets to render (streak, accountability, pledge, panic, meditation).
    /// Renders every widget when omitted.
    pub kinds: Vec<WidgetKind>,

    /// Evaluation instant (epoch ms or RFC 3339). Defaults to now.
    #[arg(long, value_parser = parse_instant)]
    pub now: Option<EpochMs>,

    /// Include seconds at the hours and minutes tiers
    #[arg(long)]
    pub seconds: bool,
}

#[derive(Debug, Serialize)]
struct RenderedWidget {
    kind: WidgetKind,
    host_kind: &'static str,
    #[serde(flatten)]
    view: WidgetView,
}

pub fn handle(args: RenderArgs, ctx: &Context) -> Result<()> {
    let prefs = ctx.load_prefs()?;
    let now = ctx.now(args.now);
    let options = FormatOptions {
        show_seconds: args.seconds,
    };
    let kinds = if args.kinds.is_empty() {
        WidgetKind::ALL.to_vec()
    } else {
        args.kinds
    };

    let rendered: Vec<RenderedWidget> = kinds
        .into_iter()
        .map(|kind| RenderedWidget {
            kind,
            host_kind: kind.host_kind(),
            view: render_widget(kind, &prefs, &ctx.labels, now, options),
        })
        .collect();

    match ctx.format {
        OutputFormat::Text => {
            let headed = rendered.len() > 1;
            for (i, widget) in rendered.iter().enumerate() {
                if headed {
                    if i > 0 {
                        println!();
                    }
                    println!("[{}]", widget.kind);
                }
                for line in widget_lines(&widget.view) {
                    println!("{}", line);
                }
            }
        }
        OutputFormat::Json => print_json(&rendered)?,
    }
    Ok(())
}
