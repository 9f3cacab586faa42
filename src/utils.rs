//! Helpers for whitespace normalization, log previews and output directories.

use crate::error::{Result, ScheduleError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Trim a line and collapse every internal whitespace run to one space.
///
/// The schedule markup is hand-indented and inconsistent, so every line
/// goes through this before any pattern is tried.
///
/// ```ignore
/// assert_eq!(normalize_whitespace("  <a  href=\"x\">\tHi</a> "), "<a href=\"x\"> Hi</a>");
/// ```
pub fn normalize_whitespace(line: &str) -> String {
    WHITESPACE_RUN.replace_all(line.trim(), " ").into_owned()
}

/// Truncate a string for logging, appending `…(+N bytes)` when cut.
///
/// The cut is moved back to the nearest char boundary so multibyte text
/// never splits.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then writes and removes a probe file.
///
/// # Errors
///
/// Returns [`ScheduleError::Io`] if the directory cannot be created or
/// written to.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| ScheduleError::io(path, e))?;

    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path).map_err(|e| ScheduleError::io(&probe_path, e))?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_and_trims() {
        assert_eq!(
            normalize_whitespace("\t  <span   class=\"time_schedule\">8:00\u{a0}PM</span>  \r"),
            "<span class=\"time_schedule\">8:00 PM</span>"
        );
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace("Drama  \t Hour"), "Drama Hour");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("<html></html>", 100), "<html></html>");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.ends_with("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundary() {
        // 'é' is two bytes; cutting at 1 would split it.
        let result = truncate_for_log("éé", 1);
        assert_eq!(result, "…(+4 bytes)");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing_dir() {
        let dir = std::env::temp_dir().join(format!("tv_schedule_utils_{}", std::process::id()));
        let path = dir.join("nested");
        let path_str = path.to_str().unwrap();
        ensure_writable_dir(path_str).await.unwrap();
        assert!(path.is_dir());
        assert!(!path.join("..__probe_write__").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
