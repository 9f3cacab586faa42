//! Schedule page scraping.
//!
//! Scraping is two steps, kept separate so the extractor can run on any
//! text:
//!
//! 1. **Fetching**: a [`schedule::PageSource`] retrieves the page for a
//!    query URL (one GET, no retries)
//! 2. **Extraction**: [`schedule::extract_listings`] scans the body line
//!    by line and returns the listings in page order

pub mod schedule;
