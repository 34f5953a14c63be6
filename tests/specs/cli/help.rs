//! CLI help output specs

use crate::prelude::*;

#[test]
fn no_subcommand_prints_help() {
    cli()
        .passes()
        .stdout_has("Usage: streak")
        .stdout_has("elapsed")
        .stdout_has("render")
        .stdout_has("refresh");
}

#[test]
fn version_flag() {
    cli()
        .args(&["-v"])
        .passes()
        .stdout_has(concat!("streak ", env!("CARGO_PKG_VERSION")));
}

#[test]
fn logging_goes_to_stderr() {
    let home = Home::empty();
    home.streak()
        .env("STREAK_LOG", "debug")
        .args(&["open", "stoppr://panic"])
        .passes()
        .stdout_eq("Recorded pending navigation to panic\n")
        .stderr_has("recorded pending navigation");
}

#[test]
fn quiet_by_default() {
    let home = Home::subscribed();
    let out = home
        .streak()
        .args(&["render", "--now", &START_MS.to_string()])
        .passes();
    assert_eq!(out.stderr(), "");
}
