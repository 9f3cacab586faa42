//! # TV Schedule
//!
//! Fetches a television channel's daily programme schedule page and turns
//! it into listing records (time, title, optional URL), rendered as text,
//! XML or JSON.
//!
//! ## Usage
//!
//! ```sh
//! tv_schedule -y 2011 -m 4 -d 25 -f xml
//! ```
//!
//! ## Flow
//!
//! 1. **Query**: resolve the date (all of year/month/day, or today)
//! 2. **Fetching**: one GET of `<base_url>?sdate=YYYY-MM-DD`
//! 3. **Extraction**: line-oriented scan of the page for listings
//! 4. **Output**: each requested format rendered from the same listings

pub mod cli;
pub mod error;
pub mod models;
pub mod outputs;
pub mod query;
pub mod scrapers;
pub mod session;
pub mod utils;

pub use error::{Result, ScheduleError};
pub use models::{ListingRecord, ScheduleQuery};
pub use query::{build_query, to_url};
pub use scrapers::schedule::{HttpPageSource, PageSource, extract_listings};
pub use session::ScheduleSession;
