// Copyright 2026 The screenwake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Formatting helpers for the event log.

use web_sys::js_sys::Date;

/// Formats an event timestamp relative to now: "just now" under a minute, "Nm ago" under
/// an hour, otherwise the local clock time of the event.
pub fn format_timestamp(timestamp_ms: f64, now_ms: f64) -> String {
    relative_age(now_ms - timestamp_ms).unwrap_or_else(|| clock_time(timestamp_ms))
}

fn relative_age(age_ms: f64) -> Option<String> {
    // Clock adjustments can put an event slightly in the future; treat that as fresh.
    if age_ms < 60_000.0 {
        Some("just now".to_string())
    } else if age_ms < 3_600_000.0 {
        Some(format!("{}m ago", (age_ms / 60_000.0) as u32))
    } else {
        None
    }
}

fn clock_time(timestamp_ms: f64) -> String {
    let date = Date::new(&timestamp_ms.into());
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}
