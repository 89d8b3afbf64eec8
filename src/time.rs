//! Reference-time arithmetic.
//!
//! A SAC reference time is six integer headers: year, day of year, hour,
//! minute, second and millisecond. Components outside their calendar range
//! are carried into the next larger unit, so `nzsec = 75` reads as one
//! minute and fifteen seconds.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Timelike, Utc};

use crate::{Result, SacError};

/// Reference-time components in header order:
/// `[nzyear, nzjday, nzhour, nzmin, nzsec, nzmsec]`.
pub type RefTimeFields = [i32; 6];

/// Compose the six reference-time components into an instant.
pub fn compose(fields: RefTimeFields) -> Result<DateTime<Utc>> {
    let [year, jday, hour, minute, second, msec] = fields;
    let invalid = || SacError::InvalidReferenceTime(format!("{fields:?}"));
    let start = NaiveDate::from_yo_opt(year, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(invalid)?;
    let offset = TimeDelta::try_days(i64::from(jday) - 1)
        .and_then(|d| d.checked_add(&TimeDelta::try_hours(hour.into())?))
        .and_then(|d| d.checked_add(&TimeDelta::try_minutes(minute.into())?))
        .and_then(|d| d.checked_add(&TimeDelta::try_seconds(second.into())?))
        .and_then(|d| d.checked_add(&TimeDelta::try_milliseconds(msec.into())?))
        .ok_or_else(invalid)?;
    start
        .checked_add_signed(offset)
        .map(|t| t.and_utc())
        .ok_or_else(invalid)
}

/// Split an instant into the six reference-time components. Sub-millisecond
/// precision is truncated; use [`round_to_millisecond`] first to round.
pub fn decompose(t: DateTime<Utc>) -> RefTimeFields {
    [
        t.year(),
        t.ordinal() as i32,
        t.hour() as i32,
        t.minute() as i32,
        t.second() as i32,
        (t.timestamp_subsec_millis() % 1000) as i32,
    ]
}

/// Round an instant to the nearest millisecond; half a millisecond rounds up.
pub fn round_to_millisecond(t: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let nanos = i64::from(t.timestamp_subsec_nanos());
    let millis = (nanos + 500_000) / 1_000_000;
    t.checked_sub_signed(TimeDelta::nanoseconds(nanos))
        .and_then(|s| s.checked_add_signed(TimeDelta::milliseconds(millis)))
        .ok_or_else(|| SacError::InvalidReferenceTime(t.to_rfc3339()))
}

/// `a - b` in seconds.
pub fn seconds_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    let delta = a - b;
    match delta.num_nanoseconds() {
        Some(ns) => ns as f64 * 1e-9,
        None => delta.num_milliseconds() as f64 * 1e-3,
    }
}

/// `t + seconds`, at nanosecond resolution.
pub fn shift(t: DateTime<Utc>, seconds: f64) -> Result<DateTime<Utc>> {
    let nanos = (seconds * 1e9).round();
    if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
        return Err(SacError::InvalidReferenceTime(format!(
            "{t} shifted by {seconds} s"
        )));
    }
    t.checked_add_signed(TimeDelta::nanoseconds(nanos as i64))
        .ok_or_else(|| SacError::InvalidReferenceTime(format!("{t} shifted by {seconds} s")))
}
