// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared preference keys. These names are a contract with the main app.

// Streak widget
pub const STREAK_START_TIMESTAMP: &str = "streak_start_timestamp";
pub const STREAK_LABEL: &str = "widget_localized_label_sugar_free_since";
pub const HAS_ACTIVE_SUBSCRIPTION: &str = "widget_has_active_subscription";
pub const SUBSCRIBE_PROMPT: &str = "widget_subscribeToTrackStreak";

// Accountability widget
pub const ACCOUNTABILITY_HAS_PARTNER: &str = "accountability_has_partner";
pub const ACCOUNTABILITY_MY_NAME: &str = "accountability_my_name";
pub const ACCOUNTABILITY_MY_DAYS: &str = "accountability_my_days";
pub const ACCOUNTABILITY_MY_PERCENTAGE: &str = "accountability_my_percentage";
pub const ACCOUNTABILITY_PARTNER_NAME: &str = "accountability_partner_name";
pub const ACCOUNTABILITY_PARTNER_DAYS: &str = "accountability_partner_days";
pub const ACCOUNTABILITY_PARTNER_PERCENTAGE: &str = "accountability_partner_percentage";
pub const ACCOUNTABILITY_TITLE: &str = "accountability_localized_title";
pub const ACCOUNTABILITY_DAYS_SUFFIX: &str = "accountability_localized_days_suffix";

// Written on widget taps, consumed by the app on launch
pub const PENDING_HOME_NAVIGATION: &str = "pending_home_navigation";
pub const PENDING_WIDGET_DEEPLINK: &str = "pending_widget_deeplink";
pub const FORCE_KEEP_WELCOME_VIDEO: &str = "force_keep_welcome_video";
