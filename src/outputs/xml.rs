//! XML rendering of listings.
//!
//! The document has a fixed shape, one `<programme>` per listing in
//! schedule order:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <programmes>
//!   <programme>
//!     <time> 8:00 PM </time>
//!     <title> Drama Hour </title>
//!     <url> http://x/show </url>
//!   </programme>
//! </programmes>
//! ```
//!
//! Each value is wrapped in one leading and one trailing space. By default
//! values are written verbatim, so a title containing `<` or `&` produces
//! malformed XML. Set [`XmlOptions::escape`] to escape them instead.

use crate::models::ListingRecord;
use quick_xml::escape::escape;
use std::fmt::Write;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlOptions {
    /// Escape `<`, `>`, `&`, `'` and `"` in values.
    pub escape: bool,
}

/// Render listings as XML without escaping.
pub fn to_xml(records: &[ListingRecord]) -> String {
    to_xml_with(records, XmlOptions::default())
}

pub fn to_xml_with(records: &[ListingRecord], options: XmlOptions) -> String {
    let value = |s: &str| -> String {
        if options.escape {
            escape(s).into_owned()
        } else {
            s.to_string()
        }
    };

    let mut xml = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(xml, "{XML_DECLARATION}");
    let _ = writeln!(xml, "<programmes>");
    for record in records {
        let _ = writeln!(xml, "  <programme>");
        let _ = writeln!(xml, "    <time> {} </time>", value(&record.time));
        let _ = writeln!(xml, "    <title> {} </title>", value(&record.title));
        if let Some(url) = &record.url {
            let _ = writeln!(xml, "    <url> {} </url>", value(url));
        }
        let _ = writeln!(xml, "  </programme>");
    }
    xml.push_str("</programmes>");
    xml
}
