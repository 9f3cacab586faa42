//! JSON rendering of listings.
//!
//! A pretty-printed array of `{ "time", "title", "url"? }` objects in
//! schedule order. `url` is omitted for unlinked titles.

use crate::error::Result;
use crate::models::ListingRecord;

pub fn to_json(records: &[ListingRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
