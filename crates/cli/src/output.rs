// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;

use streak_widgets::{AccountabilityView, PartnerCard, StreakView, WidgetView};

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Plain-text rendering of a widget view, one display line per line.
pub fn widget_lines(view: &WidgetView) -> Vec<String> {
    match view {
        WidgetView::Streak(StreakView::Counter { label, text, .. }) => {
            let mut lines = vec![label.clone(), text.primary.clone()];
            lines.extend(text.secondary.clone());
            lines
        }
        WidgetView::Streak(StreakView::Locked { prompt }) => {
            prompt.lines().map(str::to_string).collect()
        }
        WidgetView::Accountability(AccountabilityView::NoPartner) => {
            vec!["No accountability partner yet".to_string()]
        }
        WidgetView::Accountability(AccountabilityView::Partners { title, me, partner }) => {
            vec![title.clone(), card_line(me), card_line(partner)]
        }
        WidgetView::Action(action) => vec![format!("{} -> {}", action.kind, action.link)],
    }
}

fn card_line(card: &PartnerCard) -> String {
    format!("{}: {} ({})", card.name, card.percentage_text, card.days_text)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
