//! Data models for scraped schedule listings and the query that selects them.
//!
//! - [`ListingRecord`]: one programme entry as scraped from the schedule page
//! - [`ScheduleQuery`]: the immutable date a schedule page is requested for

use serde::{Deserialize, Serialize};
use std::fmt;

/// One programme entry in the daily schedule.
///
/// Records keep the order in which they appear on the page, which is the
/// broadcast order for the day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ListingRecord {
    /// The time label exactly as it appears in the markup (e.g. `8:00 PM`).
    pub time: String,
    /// The programme title.
    pub title: String,
    /// Link target, present only when the title was rendered as a hyperlink.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ListingRecord {
    pub fn new(time: impl Into<String>, title: impl Into<String>, url: Option<String>) -> Self {
        Self {
            time: time.into(),
            title: title.into(),
            url,
        }
    }
}

/// The date a schedule page is requested for.
///
/// Built once through [`crate::query::build_query`] and never mutated.
/// No calendar validation beyond the per-field ranges is performed, so
/// a day of 31 in a 30-day month is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl fmt::Display for ScheduleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
