// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! streak - Streak widget toolkit CLI

mod commands;
mod config;
mod env;
mod output;
mod time_arg;

use output::OutputFormat;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use commands::{elapsed, link, refresh, render, Context};
use std::path::PathBuf;
use streak_core::SystemClock;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "streak",
    version,
    disable_version_flag = true,
    about = "Elapsed-time formatting and widget view models for streak widgets"
)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    #[arg(short = 'V', action = ArgAction::Version, hide = true)]
    version_upper: (),

    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Preference file (overrides STREAK_PREFS)
    #[arg(long = "prefs", global = true, value_name = "PATH")]
    prefs: Option<PathBuf>,

    /// Config file (overrides STREAK_CONFIG)
    #[arg(long = "config", global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Elapsed time since the streak start, with tier and display text
    Elapsed(elapsed::ElapsedArgs),
    /// Render widget view models from the preference file
    Render(render::RenderArgs),
    /// Resolve a widget deep link
    Link {
        /// Deep link URI, e.g. stoppr://panic
        uri: String,
    },
    /// Handle a widget tap: record the pending navigation for the app
    Open {
        /// Deep link URI, e.g. stoppr://pledge
        uri: String,
    },
    /// Next refresh instant for a widget
    Refresh(refresh::RefreshArgs),
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an error for display, skipping a source chain the top-level
/// message already repeats.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn setup_logging() {
    let filter = env::log_filter().unwrap_or_else(|| "warn".to_string());
    let filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            cli_command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let config_path = match cli.config {
        Some(path) => path,
        None => env::config_path()?,
    };
    let config = Config::load(&config_path)?;
    debug!(path = %config_path.display(), "loaded config");

    let prefs_path = match cli.prefs {
        Some(path) => path,
        None => env::prefs_path()?,
    };

    let ctx = Context {
        format: cli.output,
        prefs_path,
        labels: config.labels,
        clock: Box::new(SystemClock),
    };

    match command {
        Commands::Elapsed(args) => elapsed::handle(args, &ctx),
        Commands::Render(args) => render::handle(args, &ctx),
        Commands::Link { uri } => link::handle_link(&uri, &ctx),
        Commands::Open { uri } => link::handle_open(&uri, &ctx),
        Commands::Refresh(args) => refresh::handle(args, &ctx),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
