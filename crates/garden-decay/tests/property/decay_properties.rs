use chrono::{Duration, TimeZone, Utc};
use garden_core::constants::DUE_LABEL;
use garden_decay::compute_state;
use proptest::prelude::*;

fn base() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn label_has_known_shape(label: &str) -> bool {
    if label == DUE_LABEL {
        return true;
    }
    let parts: Vec<&str> = label.split(' ').collect();
    fn numeric(s: &str, suffix: char) -> bool {
        s.strip_suffix(suffix)
            .map_or(false, |n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    }
    match parts.as_slice() {
        [d, h] if d.ends_with('d') => numeric(d, 'd') && numeric(h, 'h'),
        [h, m] => numeric(h, 'h') && numeric(m, 'm'),
        [m] => numeric(m, 'm'),
        _ => false,
    }
}

proptest! {
    #[test]
    fn full_when_no_time_elapsed(days in 0u32..365, hours in 0u32..48) {
        prop_assume!(days > 0 || hours > 0);
        let state = compute_state(base(), days, hours, base());
        prop_assert_eq!(state.percentage.value(), 100.0);
    }

    #[test]
    fn percentage_always_bounded(
        days in 0u32..10_000,
        hours in 0u32..10_000,
        offset_secs in -1_000_000_000i64..1_000_000_000,
    ) {
        let state = compute_state(base(), days, hours, base() + Duration::seconds(offset_secs));
        let p = state.percentage.value();
        prop_assert!((0.0..=100.0).contains(&p), "out of bounds: {}", p);
        prop_assert!(state.remaining_ms >= 0);
    }

    #[test]
    fn zero_interval_always_due(offset_secs in -1_000_000i64..1_000_000_000) {
        let state = compute_state(base(), 0, 0, base() + Duration::seconds(offset_secs));
        prop_assert_eq!(state.percentage.value(), 0.0);
        prop_assert_eq!(state.time_left.as_str(), DUE_LABEL);
    }

    #[test]
    fn identical_inputs_identical_output(
        days in 0u32..100,
        hours in 0u32..24,
        offset_secs in 0i64..10_000_000,
    ) {
        let now = base() + Duration::seconds(offset_secs);
        prop_assert_eq!(
            compute_state(base(), days, hours, now),
            compute_state(base(), days, hours, now)
        );
    }

    #[test]
    fn non_increasing_as_time_passes(
        days in 0u32..30,
        hours in 0u32..24,
        a in 0i64..5_000_000,
        b in 0i64..5_000_000,
    ) {
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let first = compute_state(base(), days, hours, base() + Duration::seconds(early));
        let second = compute_state(base(), days, hours, base() + Duration::seconds(late));
        prop_assert!(
            second.percentage.value() <= first.percentage.value(),
            "not monotonic: {} then {}",
            first.percentage.value(),
            second.percentage.value()
        );
        prop_assert!(second.remaining_ms <= first.remaining_ms);
    }

    #[test]
    fn label_is_one_of_four_shapes(
        days in 0u32..400,
        hours in 0u32..48,
        offset_secs in -100_000i64..50_000_000,
    ) {
        let state = compute_state(base(), days, hours, base() + Duration::seconds(offset_secs));
        prop_assert!(label_has_known_shape(&state.time_left), "bad label: {}", state.time_left);
    }
}
