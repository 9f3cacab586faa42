//! Plain-text report of listings.

use crate::models::ListingRecord;
use std::fmt::Write;

const SEPARATOR: &str = "----------------------------------------";

/// Render listings as a human-readable report.
///
/// Each listing is three or four lines (the `URL:` line only when a link
/// was scraped) followed by a dashed separator:
///
/// ```text
///  Time: 8:00 PM
/// Title: Drama Hour
///   URL: http://x/show
/// ----------------------------------------
/// ```
pub fn to_text(records: &[ListingRecord]) -> String {
    let mut text = String::new();
    for record in records {
        let _ = writeln!(text, " Time: {}", record.time);
        let _ = writeln!(text, "Title: {}", record.title);
        if let Some(url) = &record.url {
            let _ = writeln!(text, "  URL: {}", url);
        }
        let _ = writeln!(text, "{SEPARATOR}");
    }
    text
}
