//! Report rendering and writing.
//!
//! # Submodules
//!
//! - [`xml`]: fixed-shape `<programmes>` document
//! - [`text`]: human-readable report
//! - [`json`]: array of listing objects
//!
//! All formats render the same listing sequence. Reports go to stdout,
//! or with an output directory to one file per format named after the
//! query date:
//!
//! ```text
//! output_dir/
//! ├── 2011-04-25.txt
//! ├── 2011-04-25.xml
//! └── 2011-04-25.json
//! ```

pub mod json;
pub mod text;
pub mod xml;

use crate::error::{Result, ScheduleError};
use crate::models::{ListingRecord, ScheduleQuery};
use clap::ValueEnum;
use tokio::fs;
use tracing::{info, instrument};
use self::xml::XmlOptions;

/// A report format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Xml,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Xml => "xml",
            OutputFormat::Json => "json",
        }
    }
}

/// Render `records` in the given format.
pub fn render(format: OutputFormat, records: &[ListingRecord], xml_options: XmlOptions) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => text::to_text(records),
        OutputFormat::Xml => xml::to_xml_with(records, xml_options),
        OutputFormat::Json => json::to_json(records)?,
    })
}

/// Write a rendered report to `{output_dir}/{YYYY-MM-DD}.{ext}`.
///
/// Returns the path written.
#[instrument(level = "info", skip(query, report), fields(date = %query))]
pub async fn write_report(
    output_dir: &str,
    query: &ScheduleQuery,
    format: OutputFormat,
    report: &str,
) -> Result<String> {
    let path = format!(
        "{}/{}.{}",
        output_dir.trim_end_matches('/'),
        query,
        format.extension()
    );
    info!(%path, "Writing report");
    fs::write(&path, report)
        .await
        .map_err(|e| ScheduleError::io(&path, e))?;
    info!(%path, bytes = report.len(), "Wrote report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ListingRecord> {
        vec![ListingRecord::new("8:00 PM", "Drama Hour", Some("http://x/show".into()))]
    }

    #[test]
    fn test_render_dispatches_by_format() {
        let records = sample();
        let opts = XmlOptions::default();
        assert!(render(OutputFormat::Text, &records, opts).unwrap().starts_with(" Time: 8:00 PM"));
        assert!(render(OutputFormat::Xml, &records, opts).unwrap().contains("<programmes>"));
        assert!(render(OutputFormat::Json, &records, opts).unwrap().starts_with('['));
    }

    #[tokio::test]
    async fn test_write_report_names_file_after_date() {
        let dir = std::env::temp_dir().join(format!("tv_schedule_outputs_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let query = ScheduleQuery {
            year: 2011,
            month: 4,
            day: 25,
        };
        let report = text::to_text(&sample());
        let path = write_report(dir.to_str().unwrap(), &query, OutputFormat::Text, &report)
            .await
            .unwrap();
        assert!(path.ends_with("/2011-04-25.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), report);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_write_report_missing_dir_is_io_error() {
        let dir = std::env::temp_dir()
            .join(format!("tv_schedule_missing_{}", std::process::id()))
            .join("does/not/exist");
        let query = ScheduleQuery {
            year: 2011,
            month: 4,
            day: 25,
        };
        let err = write_report(dir.to_str().unwrap(), &query, OutputFormat::Xml, "x")
            .await
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Io { .. }));
    }
}
