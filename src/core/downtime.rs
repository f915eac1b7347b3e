//! Downtime calculator for streetlights.
//!
//! Lights operate from 6PM (18:00) to 6AM (06:00) the following day, a
//! 12-hour nightly window. Given the instant an outage was reported and the
//! instant it was fixed, this module computes how many hours the light was
//! supposed to be lit but wasn't.
//!
//! The dawn boundary (exactly 06:00) counts as inside the lit window in
//! every branch.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Hour at which the lit window opens.
pub const LIT_START: f64 = 18.0;
/// Hour at which the lit window closes (dawn, next day).
pub const DAWN: f64 = 6.0;
/// Length of one full nightly window.
pub const NIGHT_HOURS: f64 = 12.0;

/// Time-of-day as a fractional hour. Seconds are accepted on input but do
/// not contribute to the figure.
fn fractional_hour(t: NaiveDateTime) -> f64 {
    t.hour() as f64 + t.minute() as f64 / 60.0
}

/// Cumulative lit-window hours between `report` and `fix`.
///
/// Pure and deterministic; the result is always >= 0. The caller guarantees
/// `fix >= report`, a raw negative interval is clamped rather than reported
/// as an error.
pub fn downtime_hours(report: NaiveDateTime, fix: NaiveDateTime) -> f64 {
    // Day buckets come from the calendar dates, not the full instants: a
    // report at 20:00 fixed at 04:00 the next morning is a one-day pair.
    let diff_days = (fix.date() - report.date()).num_days();

    let report_hour = fractional_hour(report);
    let fix_hour = fractional_hour(fix);

    let mut hours = 0.0;

    if diff_days == 0 {
        if report_hour >= LIT_START && fix_hour <= DAWN {
            // Both inside the window spanning midnight.
            hours = fix_hour + (24.0 - report_hour);
        } else if report_hour >= LIT_START && fix_hour > DAWN {
            // Report inside the window, fix after it closed at dawn:
            // the light missed the remainder of that night.
            hours = NIGHT_HOURS - (report_hour - LIT_START);
        } else if report_hour < DAWN && fix_hour <= DAWN {
            // Both in the same pre-dawn segment.
            hours = fix_hour - report_hour;
        }
        // Otherwise the light was never due to be on.
    } else {
        // Remainder of the first night.
        if report_hour >= LIT_START {
            hours += NIGHT_HOURS - (report_hour - LIT_START);
        } else if report_hour < DAWN {
            hours += DAWN - report_hour;
        }

        // Portion of the last day.
        if fix_hour <= DAWN {
            hours += fix_hour;
        } else if fix_hour < LIT_START {
            // Fix during daylight: the night before was fully dark.
            hours += DAWN;
        } else {
            // Fix after the next window opened.
            hours += DAWN + (fix_hour - LIT_START);
        }

        // Full intervening nights.
        if diff_days > 1 {
            hours += (diff_days - 1) as f64 * NIGHT_HOURS;
        }
    }

    hours.max(0.0)
}

/// String-facing wrapper over [`downtime_hours`].
///
/// Dates are `YYYY-MM-DD`, times `HH:MM:SS` (seconds optional), interpreted
/// as local wall-clock time.
pub fn compute_downtime(
    report_date: &str,
    report_time: &str,
    fix_date: &str,
    fix_time: &str,
) -> AppResult<f64> {
    let report = parse_instant(report_date, report_time)?;
    let fix = parse_instant(fix_date, fix_time)?;
    Ok(downtime_hours(report, fix))
}

/// Combine a date string and a time string into a single instant.
pub fn parse_instant(date: &str, time: &str) -> AppResult<NaiveDateTime> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(date.to_string()))?;
    let t = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| AppError::InvalidTime(time.to_string()))?;
    Ok(d.and_time(t))
}
