// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};

/// Compute the UTC bounds `[startOfDay, startOfDay + 24h)` for a calendar
/// date in the local timezone.
///
/// Returns `None` for dates whose local midnight does not exist (DST gap).
pub fn local_day_bounds(date: NaiveDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    let start = Local
        .from_local_datetime(&midnight)
        .earliest()?
        .with_timezone(&Utc);
    Some((start, start + Duration::hours(24)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_bounds_span_24_hours() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 13).unwrap();
        let (start, end) = local_day_bounds(date).unwrap();
        assert_eq!(end - start, Duration::hours(24));
    }

    #[test]
    fn test_day_start_is_local_midnight() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 13).unwrap();
        let (start, _) = local_day_bounds(date).unwrap();
        let local_start = start.with_timezone(&Local);
        assert_eq!(local_start.date_naive(), date);
        assert_eq!(local_start.time(), chrono::NaiveTime::MIN);
    }
}
