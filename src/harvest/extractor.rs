//! Anchor href extraction from HTML
//!
//! The extractor is a pure function over the fetched markup. Href values are
//! collected exactly as they appear in the document: no normalization, no
//! resolution against a base URL, duplicates kept, document order preserved.

use scraper::{Html, Selector};

/// Extracts the href value of every anchor element that has one
///
/// Malformed or partial markup never errors; the parser degrades to whatever
/// anchors it can locate. Anchors without an href attribute are skipped.
///
/// # Arguments
///
/// * `html` - The HTML content to scan
///
/// # Returns
///
/// The raw href values, in document order
///
/// # Example
///
/// ```
/// use link_harvester::harvest::extract_links;
///
/// let html = r#"<a href="/a">x</a><a>y</a><a href="/b">z</a>"#;
/// assert_eq!(extract_links(html), vec!["/a", "/b"]);
/// ```
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut links = Vec::new();
    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                links.push(href.to_string());
            }
        }
    }

    links
}
