//! Command-line interface definitions.
//!
//! All options can be given as flags. The schedule page URL has no
//! default and must be given with `--base-url` or `TV_SCHEDULE_BASE_URL`.

use crate::outputs::OutputFormat;
use clap::Parser;
use url::Url;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Today's schedule as text
/// tv_schedule --base-url http://tv.example/schedule
///
/// # A given day as XML and JSON files
/// export TV_SCHEDULE_BASE_URL=http://tv.example/schedule
/// tv_schedule -y 2011 -m 4 -d 25 -f xml -f json -o ./listings
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Schedule year (requires --month and --day)
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Schedule month, 1-12 (requires --year and --day)
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Schedule day, 1-31 (requires --year and --month)
    #[arg(short, long)]
    pub day: Option<u32>,

    /// Channel schedule page URL (required); the date is appended as `?sdate=YYYY-MM-DD`
    #[arg(long, env = "TV_SCHEDULE_BASE_URL", value_parser = parse_base_url)]
    pub base_url: String,

    /// Report format; repeat to render several from one fetch
    #[arg(short, long = "format", value_enum, default_values_t = [OutputFormat::Text])]
    pub formats: Vec<OutputFormat>,

    /// Write reports as `<dir>/<YYYY-MM-DD>.<ext>` instead of stdout
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Escape XML special characters in values
    #[arg(long)]
    pub escape_xml: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn parse_base_url(s: &str) -> Result<String, String> {
    let url = Url::parse(s).map_err(|e| format!("invalid URL: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme `{}`", url.scheme()));
    }
    if url.query().is_some() {
        return Err("base URL must not carry a query string".into());
    }
    Ok(s.to_string())
}
