//! A single extraction session: one query, one fetch, many renderings.

use crate::error::Result;
use crate::models::{ListingRecord, ScheduleQuery};
use crate::outputs::{OutputFormat, json, render, text, xml};
use crate::query::to_url;
use crate::scrapers::schedule::{PageSource, extract_listings};
use tokio::sync::OnceCell;
use tracing::{info, instrument};

/// Fetches the schedule page for one query at most once and serves every
/// formatter from the same listings.
///
/// A failed fetch is not cached; the next call tries again.
pub struct ScheduleSession<S> {
    source: S,
    base_url: String,
    query: ScheduleQuery,
    listings: OnceCell<Vec<ListingRecord>>,
}

impl<S: PageSource> ScheduleSession<S> {
    pub fn new(source: S, base_url: impl Into<String>, query: ScheduleQuery) -> Self {
        Self {
            source,
            base_url: base_url.into(),
            query,
            listings: OnceCell::new(),
        }
    }

    pub fn query(&self) -> &ScheduleQuery {
        &self.query
    }

    /// The page URL for this session's date.
    pub fn url(&self) -> String {
        to_url(&self.base_url, &self.query)
    }

    /// The listings for this session's date, fetched on first use.
    ///
    /// # Errors
    ///
    /// [`crate::error::ScheduleError::FetchFailed`] if the page cannot be
    /// retrieved.
    #[instrument(level = "info", skip(self), fields(date = %self.query))]
    pub async fn listings(&self) -> Result<&[ListingRecord]> {
        let listings = self
            .listings
            .get_or_try_init(|| async {
                let url = self.url();
                info!(%url, "Fetching schedule");
                let body = self.source.fetch(&url).await?;
                Ok::<_, crate::error::ScheduleError>(extract_listings(&body))
            })
            .await?;
        Ok(listings.as_slice())
    }

    pub async fn to_xml(&self) -> Result<String> {
        Ok(xml::to_xml(self.listings().await?))
    }

    pub async fn to_text(&self) -> Result<String> {
        Ok(text::to_text(self.listings().await?))
    }

    pub async fn to_json(&self) -> Result<String> {
        json::to_json(self.listings().await?)
    }

    pub async fn render(&self, format: OutputFormat, xml_options: xml::XmlOptions) -> Result<String> {
        render(format, self.listings().await?, xml_options)
    }
}
