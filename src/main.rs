//! Command-line entry point for `tv_schedule`.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use tv_schedule::cli::Cli;
use tv_schedule::outputs::{write_report, xml::XmlOptions};
use tv_schedule::utils::ensure_writable_dir;
use tv_schedule::{HttpPageSource, ScheduleSession, build_query};

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("tv_schedule starting up");
    debug!(?args, "Parsed CLI arguments");

    let query = match build_query(args.year, args.month, args.day) {
        Ok(q) => q,
        Err(e) => {
            error!(error = %e, "Rejected schedule date");
            return Err(e.into());
        }
    };

    if let Some(dir) = &args.output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(path = %dir, error = %e, "Output directory is not writable");
            return Err(e.into());
        }
    }

    let session = ScheduleSession::new(HttpPageSource::new(), args.base_url.clone(), query);
    info!(date = %session.query(), url = %session.url(), "Schedule session ready");

    let listing_count = match session.listings().await {
        Ok(listings) => listings.len(),
        Err(e) => {
            error!(error = %e, "Failed to fetch schedule");
            return Err(e.into());
        }
    };

    let xml_options = XmlOptions {
        escape: args.escape_xml,
    };
    for format in &args.formats {
        let report = session.render(*format, xml_options).await?;
        match &args.output_dir {
            Some(dir) => {
                write_report(dir, session.query(), *format, &report).await?;
            }
            None if report.ends_with('\n') => print!("{report}"),
            None => println!("{report}"),
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        listings = listing_count,
        formats = args.formats.len(),
        "Execution complete"
    );

    Ok(())
}
