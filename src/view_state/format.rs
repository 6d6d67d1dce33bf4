//! Number and time formatting for list rows.

use chrono::{DateTime, Utc};

/// Abbreviate a count: 999 → "999", 1200 → "1.2K", 3400000 → "3.4M".
pub fn abbreviate_number(n: u32) -> String {
    if n >= 1_000_000 {
        trim_decimal(n as f64 / 1_000_000.0, "M")
    } else if n >= 1000 {
        trim_decimal(n as f64 / 1000.0, "K")
    } else {
        n.to_string()
    }
}

fn trim_decimal(value: f64, suffix: &str) -> String {
    let rounded = (value * 10.0).floor() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}{}", rounded as u64, suffix)
    } else {
        format!("{:.1}{}", rounded, suffix)
    }
}

/// Relative time such as "just now", "5 minutes ago", "3 days ago".
/// Older than a month falls back to the date.
pub fn human_time(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - time).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }
    let (value, unit) = if secs < 3600 {
        (secs / 60, "minute")
    } else if secs < 86_400 {
        (secs / 3600, "hour")
    } else if secs < 30 * 86_400 {
        (secs / 86_400, "day")
    } else {
        return time.format("%b %-d, %Y").to_string();
    };
    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}
