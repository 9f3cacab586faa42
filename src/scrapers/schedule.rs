//! Daily schedule page scraper.
//!
//! The schedule page is not parsed as a document. It is scanned line by
//! line for a handful of tag patterns, carrying two pieces of state
//! between lines: the most recent time label, and whether a title is
//! expected next. A typical entry looks like:
//!
//! ```text
//! <span class="time_schedule">8:00 PM</span>
//! <span class="showtitle_schedule">
//!     <a href="http://x/show" target="_blank">Drama Hour</a>
//! </span>
//! ```
//!
//! Malformed markup degrades to fewer records, never to an error.

use crate::error::{Result, ScheduleError};
use crate::models::ListingRecord;
use crate::utils::{normalize_whitespace, truncate_for_log};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header;
use tracing::{debug, info, instrument, trace};

const USER_AGENT: &str = concat!("tv_schedule/", env!("CARGO_PKG_VERSION"));

static TIME_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<span[^>]*\bclass="time_schedule"[^>]*>(.*?)</span>"#).unwrap());
static TITLE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<span[^>]*\bclass="showtitle_schedule""#).unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^<h2\b").unwrap());
static ANCHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a [^>]*?href="([^>]*)">(.*?)</a>"#).unwrap());

/// Where schedule pages come from.
///
/// The HTTP implementation is [`HttpPageSource`]; tests substitute a
/// canned page.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Retrieve the body of the page at `url`.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::FetchFailed`] carrying `url` when the request fails.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches schedule pages over HTTP with a single GET and no retries.
#[derive(Debug, Clone, Default)]
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl HttpPageSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageSource for HttpPageSource {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| ScheduleError::fetch_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScheduleError::fetch_failed(url, format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScheduleError::fetch_failed(url, e))?;
        info!(%status, bytes = body.len(), "Fetched schedule page");
        debug!(preview = %truncate_for_log(&body, 300), "Schedule page body");
        Ok(body)
    }
}

/// Extract listing records from a schedule page, in page order.
///
/// Per normalized line, in priority order:
/// 1. a `time_schedule` span sets the pending time (a later one overwrites it);
/// 2. a `showtitle_schedule` span opening marks a title as expected;
/// 3. with a pending time and a title expected, the line is the title,
///    unless it is an `<h2>` heading, which is skipped without touching
///    the state. An anchor yields its text and href, cut at the first
///    `" target=`; any other line is taken verbatim as the title.
///
/// Emitting a record clears both the pending time and the expectation.
///
/// Two guards go beyond the plain scan so that every record has a
/// non-empty time and title: an empty `time_schedule` span does not set
/// (or clear) the pending time, and a line that is blank after
/// whitespace normalization is skipped like a heading instead of
/// becoming an empty title. Both are deliberate departures from the
/// bare line-matching rules above.
#[instrument(level = "debug", skip_all, fields(bytes = html.len()))]
pub fn extract_listings(html: &str) -> Vec<ListingRecord> {
    let mut listings = Vec::new();
    let mut pending_time: Option<String> = None;
    let mut title_expected = false;

    for raw in html.lines() {
        let line = normalize_whitespace(raw);

        if let Some(caps) = TIME_SPAN.captures(&line) {
            let time = caps[1].trim().to_string();
            if time.is_empty() {
                trace!("Empty time label ignored");
                continue;
            }
            if let Some(previous) = pending_time.as_deref() {
                trace!(%previous, %time, "Time label overwritten before a title");
            }
            pending_time = Some(time);
            continue;
        }

        if TITLE_SPAN.is_match(&line) {
            trace!(time = ?pending_time, "Title marker");
            title_expected = true;
            continue;
        }

        if !title_expected {
            continue;
        }
        let Some(time) = pending_time.take() else {
            continue;
        };

        if line.is_empty() || HEADING.is_match(&line) {
            trace!(%line, "Skipping heading or blank line between time and title");
            pending_time = Some(time);
            continue;
        }

        let record = match ANCHOR.captures(&line) {
            Some(caps) => {
                let href = &caps[1];
                let href = href.find("\" target=").map_or(href, |cut| &href[..cut]);
                ListingRecord::new(time, &caps[2], Some(href.to_string()))
            }
            None => ListingRecord::new(time, line, None),
        };
        debug!(time = %record.time, title = %record.title, url = ?record.url, "Listing");
        listings.push(record);
        title_expected = false;
    }

    info!(count = listings.len(), "Extracted listings");
    listings
}
