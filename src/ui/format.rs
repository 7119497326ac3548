//! Integer-only text formatting shared by the dashboard and the final
//! summary.
use std::time::Duration;

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// `HH:MM:SS` wall-clock rendering.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Human-readable byte count with one decimal digit.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    let mut value_x10 = bytes.saturating_mul(10);
    let mut unit = 0usize;
    while value_x10 >= 10_240 && unit < BYTE_UNITS.len().saturating_sub(1) {
        value_x10 /= 1024;
        unit = unit.saturating_add(1);
    }
    let label = BYTE_UNITS.get(unit).copied().unwrap_or("B");
    format!("{}.{} {}", value_x10 / 10, value_x10 % 10, label)
}

/// Thousands-separated decimal rendering.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len().saturating_add(digits.len() / 3));
    for (idx, ch) in digits.chars().enumerate() {
        let remaining = digits.len().saturating_sub(idx);
        if idx > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders a value scaled by 100 with two decimal digits.
#[must_use]
pub fn format_x100(value_x100: u64) -> String {
    format!("{}.{:02}", value_x100 / 100, value_x100 % 100)
}

/// Percentage of `part` in `total`, scaled by 10; zero when `total` is zero.
#[must_use]
pub fn percent_x10(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let scaled = u128::from(part)
        .saturating_mul(1000)
        .checked_div(u128::from(total))
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Renders a percentage scaled by 10 with one decimal digit.
#[must_use]
pub fn format_percent_x10(pct_x10: u64) -> String {
    format!("{}.{}%", pct_x10 / 10, pct_x10 % 10)
}

/// Fixed-width block bar filled proportionally to a x10 percentage.
#[must_use]
pub fn bar(pct_x10: u64, width: usize) -> String {
    let width_u64 = u64::try_from(width).unwrap_or(u64::MAX);
    let filled = pct_x10
        .saturating_mul(width_u64)
        .checked_div(1000)
        .unwrap_or(0)
        .min(width_u64);
    let filled = usize::try_from(filled).unwrap_or(width);
    let mut rendered = String::with_capacity(width.saturating_mul(3));
    for _ in 0..filled {
        rendered.push('\u{2588}');
    }
    for _ in filled..width {
        rendered.push('\u{2591}');
    }
    rendered
}
