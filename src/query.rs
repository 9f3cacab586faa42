//! Schedule query construction and date defaulting.
//!
//! A query is all-or-nothing: either the caller supplies year, month and
//! day together, or none of them and today's local date is used. Mixing
//! explicit fields with defaults is rejected.

use crate::error::{Result, ScheduleError};
use crate::models::ScheduleQuery;
use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, instrument};

/// Build a [`ScheduleQuery`] from optional date parts.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidArgument`] when only some of the parts
/// are given, or when a part is out of range (year outside `1000..=9999`,
/// month outside `1..=12`, day outside `1..=31`).
#[instrument(level = "debug")]
pub fn build_query(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Result<ScheduleQuery> {
    build_query_on(Local::now().date_naive(), year, month, day)
}

/// Same as [`build_query`] with an explicit "today".
pub fn build_query_on(
    today: NaiveDate,
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
) -> Result<ScheduleQuery> {
    let query = match (year, month, day) {
        (None, None, None) => {
            let q = ScheduleQuery {
                year: today.year(),
                month: today.month(),
                day: today.day(),
            };
            debug!(%q, "No date supplied; defaulting to today");
            q
        }
        (Some(year), Some(month), Some(day)) => ScheduleQuery { year, month, day },
        _ => {
            return Err(ScheduleError::InvalidArgument(
                "year, month and day must be supplied together or not at all".into(),
            ));
        }
    };
    validate(&query)?;
    Ok(query)
}

fn validate(q: &ScheduleQuery) -> Result<()> {
    if !(1000..=9999).contains(&q.year) {
        return Err(ScheduleError::InvalidArgument(format!(
            "year {} is not a positive four-digit year",
            q.year
        )));
    }
    if !(1..=12).contains(&q.month) {
        return Err(ScheduleError::InvalidArgument(format!(
            "month {} is out of range 1-12",
            q.month
        )));
    }
    if !(1..=31).contains(&q.day) {
        return Err(ScheduleError::InvalidArgument(format!(
            "day {} is out of range 1-31",
            q.day
        )));
    }
    Ok(())
}

/// Format the fetch URL for a query: `<base>?sdate=YYYY-MM-DD`.
pub fn to_url(base: &str, query: &ScheduleQuery) -> String {
    format!("{}?sdate={}", base, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_arguments_defaults_to_today() {
        let q = build_query_on(date(2024, 2, 29), None, None, None).unwrap();
        assert_eq!(
            q,
            ScheduleQuery {
                year: 2024,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn test_no_arguments_uses_system_date() {
        let today = Local::now().date_naive();
        let q = build_query(None, None, None).unwrap();
        // Tolerate the clock rolling over midnight between the two calls.
        let tomorrow = today.succ_opt().unwrap();
        let got = date(q.year, q.month, q.day);
        assert!(got == today || got == tomorrow);
    }

    #[test]
    fn test_explicit_date() {
        let q = build_query(Some(2011), Some(4), Some(25)).unwrap();
        assert_eq!(
            q,
            ScheduleQuery {
                year: 2011,
                month: 4,
                day: 25
            }
        );
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        let err = build_query(Some(2011), Some(13), Some(1)).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidArgument(_)));
    }

    #[test]
    fn test_partial_arguments_rejected() {
        for (y, m, d) in [
            (Some(2011), None, None),
            (None, Some(4), None),
            (Some(2011), Some(4), None),
            (None, None, Some(25)),
        ] {
            let err = build_query(y, m, d).unwrap_err();
            assert!(matches!(err, ScheduleError::InvalidArgument(_)), "{y:?} {m:?} {d:?}");
        }
    }

    #[test]
    fn test_year_must_be_four_digits() {
        assert!(build_query(Some(999), Some(1), Some(1)).is_err());
        assert!(build_query(Some(10000), Some(1), Some(1)).is_err());
        assert!(build_query(Some(-2011), Some(1), Some(1)).is_err());
        assert!(build_query(Some(1000), Some(1), Some(1)).is_ok());
    }

    #[test]
    fn test_day_range_without_calendar_check() {
        assert!(build_query(Some(2011), Some(4), Some(0)).is_err());
        assert!(build_query(Some(2011), Some(4), Some(32)).is_err());
        // April has 30 days; accepted anyway.
        assert!(build_query(Some(2011), Some(4), Some(31)).is_ok());
        assert!(build_query(Some(2011), Some(2), Some(30)).is_ok());
    }

    #[test]
    fn test_to_url_zero_pads() {
        let q = build_query(Some(2011), Some(4), Some(5)).unwrap();
        assert_eq!(
            to_url("http://tv.example/schedule", &q),
            "http://tv.example/schedule?sdate=2011-04-05"
        );
    }
}
