use chrono::{Duration, TimeZone, Utc};
use garden_core::constants::DUE_LABEL;
use garden_core::MoistureLevel;
use garden_decay::{compute_state, compute_state_for};

fn t() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
}

// ── Scenarios ────────────────────────────────────────────────────────────

#[test]
fn one_day_interval_half_elapsed() {
    let state = compute_state(t(), 1, 0, t() + Duration::hours(12));
    assert_eq!(state.percentage.value(), 50.0);
    assert_eq!(state.time_left, "12h 0m");
    assert_eq!(state.level, MoistureLevel::Fresh);
}

#[test]
fn overdue_plant_is_empty_and_due() {
    let state = compute_state(t(), 2, 0, t() + Duration::hours(50));
    assert_eq!(state.percentage.value(), 0.0);
    assert_eq!(state.time_left, DUE_LABEL);
    assert_eq!(state.remaining_ms, 0);
    assert!(state.is_due());
}

#[test]
fn one_hour_interval_half_elapsed() {
    let state = compute_state(t(), 0, 1, t() + Duration::minutes(30));
    assert_eq!(state.percentage.value(), 50.0);
    assert_eq!(state.time_left, "30m");
}

#[test]
fn freshly_watered_is_full() {
    let state = compute_state(t(), 3, 4, t());
    assert_eq!(state.percentage.value(), 100.0);
    assert_eq!(state.time_left, "3d 4h");
}

// ── Edge cases ───────────────────────────────────────────────────────────

#[test]
fn zero_interval_is_due_immediately() {
    for offset in [-1_000, 0, 1, 86_400] {
        let state = compute_state(t(), 0, 0, t() + Duration::seconds(offset));
        assert_eq!(state.percentage.value(), 0.0);
        assert_eq!(state.time_left, DUE_LABEL);
        assert_eq!(state.level, MoistureLevel::Due);
    }
}

#[test]
fn zero_interval_policy_follows_interval_type() {
    use garden_core::WateringInterval;
    for (days, hours) in [(0, 0), (0, 1), (1, 0)] {
        let state = compute_state(t(), days, hours, t());
        assert_eq!(
            state.is_due(),
            WateringInterval::new(days, hours).is_zero(),
            "{days}d {hours}h"
        );
    }
}

#[test]
fn stored_state_cannot_carry_out_of_range_percentage() {
    let mut json = serde_json::to_value(compute_state(t(), 1, 0, t())).unwrap();
    json["percentage"] = serde_json::json!(250.0);
    let state: garden_decay::WateringState = serde_json::from_value(json).unwrap();
    assert_eq!(state.percentage.value(), 100.0);
}

#[test]
fn future_last_watered_counts_as_no_elapsed_time() {
    let state = compute_state(t() + Duration::hours(5), 1, 0, t());
    assert_eq!(state.percentage.value(), 100.0);
    assert_eq!(state.remaining_ms, 86_400_000);
}

#[test]
fn long_past_last_watered_stays_at_floor() {
    let state = compute_state(t() - Duration::days(3650), 0, 1, t());
    assert_eq!(state.percentage.value(), 0.0);
    assert_eq!(state.time_left, DUE_LABEL);
}

#[test]
fn low_band_is_at_or_below_five_percent() {
    // 95% of 100 hours elapsed leaves exactly 5%.
    let state = compute_state(t(), 0, 100, t() + Duration::hours(95));
    assert_eq!(state.percentage.value(), 5.0);
    assert_eq!(state.level, MoistureLevel::Low);
    assert!(state.percentage.needs_attention(5.0));

    let state = compute_state(t(), 0, 100, t() + Duration::hours(94));
    assert_eq!(state.level, MoistureLevel::Fresh);
}

#[test]
fn last_minute_label_then_due() {
    let state = compute_state(t(), 0, 1, t() + Duration::minutes(59));
    assert_eq!(state.time_left, "1m");
    let state = compute_state(t(), 0, 1, t() + Duration::seconds(59 * 60 + 30));
    assert_eq!(state.time_left, DUE_LABEL);
    assert!(state.percentage.value() > 0.0);
}

#[test]
fn hours_field_above_a_day_is_honoured() {
    let state = compute_state(t(), 0, 30, t());
    assert_eq!(state.time_left, "1d 6h");
}

#[test]
fn plant_wrapper_matches_raw_inputs() {
    let plant = garden_core::Plant {
        id: "p".into(),
        user_id: "u".into(),
        name: "Fern".into(),
        quantity: 1,
        image_url: String::new(),
        watering_days: 1,
        watering_hours: 12,
        last_watered: t(),
        created_at: t(),
    };
    let now = t() + Duration::hours(9);
    assert_eq!(compute_state_for(&plant, now), compute_state(t(), 1, 12, now));
}
