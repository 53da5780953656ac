use garden_core::constants::{DUE_LABEL, HOURS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};

/// Human-readable countdown for the time left until the next watering.
///
/// ```text
/// hours > 24   → "{d}d {h}h"
/// hours > 0    → "{h}h {m}m"
/// minutes > 0  → "{m}m"
/// otherwise    → "Time to water!"
/// ```
///
/// Exactly 24 hours still renders as `"24h 0m"`. Negative input is treated
/// as zero.
pub fn label(remaining_ms: i64) -> String {
    let remaining = remaining_ms.max(0);
    let hours = remaining / MS_PER_HOUR;
    let minutes = (remaining % MS_PER_HOUR) / MS_PER_MINUTE;

    if hours > HOURS_PER_DAY {
        let days = hours / HOURS_PER_DAY;
        let remaining_hours = hours % HOURS_PER_DAY;
        format!("{days}d {remaining_hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        DUE_LABEL.to_string()
    }
}
