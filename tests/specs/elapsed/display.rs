//! Elapsed display specs
//!
//! Verify tier selection and display text at each tier boundary.

use crate::prelude::*;

fn elapsed_text(offset_ms: u64, extra: &[&str]) -> String {
    let home = Home::empty();
    let start = START_MS.to_string();
    let now = (START_MS + offset_ms).to_string();
    let mut args = vec!["elapsed", "--start", &start, "--now", &now];
    args.extend_from_slice(extra);
    let out = home.streak().args(&args).passes();
    out.stdout()
        .lines()
        .find_map(|line| line.strip_prefix("display: "))
        .expect("display line")
        .to_string()
}

#[test]
fn elapsed_text_report() {
    let home = Home::empty();
    home.streak()
        .args(&[
            "elapsed",
            "--start",
            &START_MS.to_string(),
            "--now",
            &FIVE_DAYS_LATER_MS.to_string(),
        ])
        .passes()
        .stdout_eq(
            "start:   2023-11-14T22:13:20Z\n\
             now:     2023-11-20T01:33:35Z\n\
             elapsed: 5d 3h 20m 15s\n\
             tier:    days\n\
             display: 5 days (3h 20m)\n",
        );
}

#[test]
fn elapsed_accepts_rfc3339_instants() {
    let home = Home::empty();
    home.streak()
        .args(&[
            "elapsed",
            "--start",
            "2023-11-14T22:13:20Z",
            "--now",
            "2023-11-20T02:33:35+01:00",
        ])
        .passes()
        .stdout_has("display: 5 days (3h 20m)");
}

#[test]
fn minutes_only_under_an_hour() {
    assert_eq!(elapsed_text(42 * 60_000 + 7_000, &[]), "42m");
}

#[test]
fn minutes_only_with_seconds() {
    assert_eq!(elapsed_text(42 * 60_000 + 7_000, &["--seconds"]), "42m 7s");
}

#[test]
fn hours_and_minutes_under_a_day() {
    assert_eq!(elapsed_text(3 * 3_600_000 + 5 * 60_000, &[]), "3h 5m");
}

#[test]
fn exactly_one_day_is_singular() {
    assert_eq!(elapsed_text(86_400_000, &[]), "1 day (0h 0m)");
}

#[test]
fn seconds_never_shown_at_days_tier() {
    assert_eq!(
        elapsed_text(2 * 86_400_000 + 59_000, &["--seconds"]),
        "2 days (0h 0m)"
    );
}

#[test]
fn start_in_the_future_shows_zero() {
    let home = Home::empty();
    home.streak()
        .args(&[
            "elapsed",
            "--start",
            &FIVE_DAYS_LATER_MS.to_string(),
            "--now",
            &START_MS.to_string(),
        ])
        .passes()
        .stdout_has("elapsed: 0d 0h 0m 0s")
        .stdout_has("display: 0m");
}

#[test]
fn start_read_from_preferences() {
    let home = Home::subscribed();
    home.streak()
        .args(&["elapsed", "--now", &FIVE_DAYS_LATER_MS.to_string()])
        .passes()
        .stdout_has("start:   2023-11-14T22:13:20Z")
        .stdout_has("display: 5 days (3h 20m)");
}

#[test]
fn no_stored_start_shows_zero() {
    let home = Home::empty();
    home.streak()
        .args(&["elapsed", "--now", &START_MS.to_string()])
        .passes()
        .stdout_has("start:   none")
        .stdout_has("tier:    minutes_only")
        .stdout_has("display: 0m");
}

#[test]
fn zero_stored_start_means_no_streak() {
    let home = Home::empty();
    home.prefs(serde_json::json!({ "streak_start_timestamp": 0 }));
    home.streak()
        .args(&["elapsed", "--now", &START_MS.to_string()])
        .passes()
        .stdout_has("start:   none");
}

#[test]
fn elapsed_json_report() {
    let home = Home::empty();
    let json = home
        .streak()
        .args(&[
            "elapsed",
            "-o",
            "json",
            "--start",
            &START_MS.to_string(),
            "--now",
            &FIVE_DAYS_LATER_MS.to_string(),
        ])
        .passes()
        .json();

    similar_asserts::assert_eq!(
        json,
        serde_json::json!({
            "start_ms": START_MS,
            "now_ms": FIVE_DAYS_LATER_MS,
            "elapsed": { "days": 5, "hours": 3, "minutes": 20, "seconds": 15 },
            "tier": "days",
            "text": { "primary": "5 days", "secondary": "3h 20m" },
        })
    );
}
