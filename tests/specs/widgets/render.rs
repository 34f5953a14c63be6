//! Widget render specs
//!
//! Verify the view models built from the preference file.

use crate::prelude::*;

#[test]
fn render_all_widgets_text() {
    let home = Home::subscribed();
    home.streak()
        .args(&["render", "--now", &FIVE_DAYS_LATER_MS.to_string()])
        .passes()
        .stdout_eq(
            "[streak]\n\
             Sugar-free since:\n\
             5 days\n\
             3h 20m\n\
             \n\
             [accountability]\n\
             No accountability partner yet\n\
             \n\
             [pledge]\n\
             pledge -> stoppr://pledge\n\
             \n\
             [panic]\n\
             panic -> stoppr://panic\n\
             \n\
             [meditation]\n\
             meditation -> stoppr://meditation\n",
        );
}

#[test]
fn single_widget_has_no_header() {
    let home = Home::subscribed();
    home.streak()
        .args(&["render", "streak", "--now", &FIVE_DAYS_LATER_MS.to_string()])
        .passes()
        .stdout_eq("Sugar-free since:\n5 days\n3h 20m\n");
}

#[test]
fn streak_locked_without_subscription() {
    let home = Home::empty();
    home.prefs(serde_json::json!({
        "streak_start_timestamp": START_MS,
        "widget_has_active_subscription": false,
    }));
    home.streak()
        .args(&["render", "streak", "--now", &FIVE_DAYS_LATER_MS.to_string()])
        .passes()
        .stdout_eq("Subscribe to\ntrack your streak\n");
}

#[test]
fn missing_preference_file_renders_defaults() {
    let home = Home::empty();
    home.streak()
        .args(&["render", "streak", "--now", &START_MS.to_string()])
        .passes()
        .stdout_eq("Subscribe to\ntrack your streak\n");
}

#[test]
fn stored_label_is_used() {
    let home = Home::empty();
    home.prefs(serde_json::json!({
        "streak_start_timestamp": START_MS,
        "widget_has_active_subscription": true,
        "widget_localized_label_sugar_free_since": "Sin azúcar desde:",
    }));
    home.streak()
        .args(&["render", "streak", "--now", &(START_MS + 600_000).to_string()])
        .passes()
        .stdout_eq("Sin azúcar desde:\n10m\n");
}

#[test]
fn accountability_partners() {
    let home = Home::empty();
    home.prefs(serde_json::json!({
        "accountability_has_partner": true,
        "accountability_my_name": "Sarah",
        "accountability_my_days": 5,
        "accountability_my_percentage": 5,
        "accountability_partner_name": "Alex",
        "accountability_partner_days": 12,
        "accountability_partner_percentage": 13,
        "accountability_localized_title": "recovery",
    }));
    home.streak()
        .args(&["render", "accountability"])
        .passes()
        .stdout_eq("RECOVERY\nSarah: 5% (5 Days)\nAlex: 13% (12 Days)\n");
}

#[test]
fn render_json_streak_counter() {
    let home = Home::subscribed();
    let json = home
        .streak()
        .args(&[
            "render",
            "streak",
            "-o",
            "json",
            "--now",
            &FIVE_DAYS_LATER_MS.to_string(),
        ])
        .passes()
        .json();

    similar_asserts::assert_eq!(
        json,
        serde_json::json!([{
            "kind": "streak",
            "host_kind": "StreakWidget",
            "widget": "streak",
            "view": {
                "state": "counter",
                "label": "Sugar-free since:",
                "tier": "days",
                "text": { "primary": "5 days", "secondary": "3h 20m" },
                "elapsed": { "days": 5, "hours": 3, "minutes": 20, "seconds": 15 },
            },
        }])
    );
}

#[test]
fn explicit_prefs_path() {
    let home = Home::empty();
    home.file(
        "other.json",
        &serde_json::json!({
            "streak_start_timestamp": START_MS,
            "widget_has_active_subscription": "true",
        })
        .to_string(),
    );
    let prefs = home.path().join("other.json");
    home.streak()
        .args(&[
            "render",
            "streak",
            "--prefs",
            prefs.to_str().unwrap(),
            "--now",
            &(START_MS + 3_600_000).to_string(),
        ])
        .passes()
        .stdout_has("1h 0m");
}

#[test]
fn prefs_env_var_is_honored() {
    let home = Home::empty();
    home.file(
        "env.json",
        &serde_json::json!({
            "streak_start_timestamp": START_MS,
            "widget_has_active_subscription": true,
        })
        .to_string(),
    );
    home.streak()
        .env("STREAK_PREFS", home.path().join("env.json"))
        .args(&["render", "streak", "--now", &(START_MS + 120_000).to_string()])
        .passes()
        .stdout_has("2m");
}
