use chrono::NaiveDate;
use luminar::core::downtime::{compute_downtime, downtime_hours, parse_instant};
use luminar::errors::AppError;

fn at(date: (i32, u32, u32), h: u32, m: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(date.0, date.1, date.2)
        .and_then(|d| d.and_hms_opt(h, m, 0))
        .expect("valid test instant")
}

#[test]
fn evening_report_fixed_next_morning_before_dawn() {
    // 20:00 -> 04:00 the next day: remainder of the first night (10)
    // plus the pre-dawn portion already elapsed on the fix day (4)
    let hours = downtime_hours(at((2024, 1, 10), 20, 0), at((2024, 1, 11), 4, 0));
    assert!((hours - 14.0).abs() < 1e-9);
}

#[test]
fn evening_report_fixed_same_night_before_midnight() {
    // 20:00 -> 23:00 the same day: the remainder of that night is charged
    let hours = downtime_hours(at((2024, 1, 10), 20, 0), at((2024, 1, 10), 23, 0));
    assert!((hours - 10.0).abs() < 1e-9);
}

#[test]
fn evening_report_fixed_after_dawn() {
    // 20:00 -> 10:00 the next morning: first-night remainder (10) plus the
    // full prior-night credit for a daytime fix (6)
    let hours = downtime_hours(at((2024, 3, 1), 20, 0), at((2024, 3, 2), 10, 0));
    assert!((hours - 16.0).abs() < 1e-9);
}

#[test]
fn daytime_outage_costs_nothing() {
    let hours = downtime_hours(at((2024, 3, 1), 9, 0), at((2024, 3, 1), 15, 0));
    assert_eq!(hours, 0.0);
}

#[test]
fn pre_dawn_report_and_fix() {
    let hours = downtime_hours(at((2024, 3, 1), 2, 0), at((2024, 3, 1), 5, 30));
    assert!((hours - 3.5).abs() < 1e-9);
}

#[test]
fn fix_exactly_at_dawn_counts_as_in_window() {
    let hours = downtime_hours(at((2024, 3, 1), 3, 0), at((2024, 3, 1), 6, 0));
    assert!((hours - 3.0).abs() < 1e-9);
}

#[test]
fn three_full_nights() {
    // 18:00 -> 06:00 three days later: 12 + 24 + 6
    let hours = downtime_hours(at((2024, 1, 10), 18, 0), at((2024, 1, 13), 6, 0));
    assert!((hours - 42.0).abs() < 1e-9);
}

#[test]
fn multi_day_with_evening_fix() {
    // first night remainder (10) + two full nights (24) + dawn credit and
    // evening portion of the last day (10)
    let hours = downtime_hours(at((2024, 1, 1), 20, 0), at((2024, 1, 4), 22, 0));
    assert!((hours - 44.0).abs() < 1e-9);
}

#[test]
fn minutes_contribute_fractionally() {
    // 01:30 -> 05:45 the same morning
    let hours = downtime_hours(at((2024, 3, 1), 1, 30), at((2024, 3, 1), 5, 45));
    assert!((hours - 4.25).abs() < 1e-9);
}

#[test]
fn result_is_never_negative() {
    let hours = downtime_hours(at((2024, 3, 2), 4, 0), at((2024, 3, 1), 22, 0));
    assert!(hours >= 0.0);
}

#[test]
fn string_wrapper_matches_typed_api() {
    let hours = compute_downtime("2024-01-10", "20:00:00", "2024-01-11", "04:00:00")
        .expect("valid inputs");
    assert!((hours - 14.0).abs() < 1e-9);
}

#[test]
fn string_wrapper_rejects_bad_date() {
    let err = compute_downtime("2024-13-01", "22:00:00", "2024-03-02", "04:00:00");
    assert!(matches!(err, Err(AppError::InvalidDate(_))));
}

#[test]
fn string_wrapper_rejects_bad_time() {
    let err = compute_downtime("2024-03-01", "25:61", "2024-03-02", "04:00:00");
    assert!(matches!(err, Err(AppError::InvalidTime(_))));
}

#[test]
fn parse_instant_accepts_short_time() {
    let dt = parse_instant("2024-03-01", "22:15").expect("parses");
    assert_eq!(dt, at((2024, 3, 1), 22, 15));
}
