//! Error taxonomy for schedule queries, fetching and output.
//!
//! Markup that matches nothing is not an error: the extractor simply
//! yields no listings. Only bad date input and failed requests surface
//! here, plus I/O failures when reports are written to disk.

use thiserror::Error;

/// Errors raised while building a query, fetching a schedule page or
/// writing rendered reports.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Malformed, partial or out-of-range date input. Raised before any
    /// network activity.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The schedule page could not be retrieved (transport error or a
    /// non-success status).
    #[error("failed to fetch {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

impl ScheduleError {
    pub fn fetch_failed(url: impl Into<String>, reason: impl ToString) -> Self {
        ScheduleError::FetchFailed {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        ScheduleError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_message_carries_url() {
        let err = ScheduleError::fetch_failed("http://x/schedule?sdate=2011-04-25", "HTTP 503");
        let msg = err.to_string();
        assert!(msg.contains("http://x/schedule?sdate=2011-04-25"));
        assert!(msg.contains("HTTP 503"));
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = ScheduleError::InvalidArgument("month 13 is out of range".into());
        assert_eq!(err.to_string(), "invalid argument: month 13 is out of range");
    }
}
