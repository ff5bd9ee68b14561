//! Page discovery on the root listing

use crate::extract::element_text;
use scraper::{Html, Selector};
use url::Url;

/// Returns the page identifiers linked from the listing's page navigation
///
/// Identifiers are the link texts, in document order, without sorting or
/// deduplication. No navigation means no pages.
pub fn discover_pages(document: &Html, selector: &Selector) -> Vec<String> {
    document.select(selector).map(element_text).collect()
}

/// Builds the URL of one listing page: `<base_url>/?<parameter>=<page>`
///
/// # Example
///
/// ```
/// use listing_harvester::crawler::page_url;
/// use url::Url;
///
/// let base = Url::parse("https://shop.example.com/smartphones").unwrap();
/// let url = page_url(&base, "page", "2");
/// assert_eq!(url.as_str(), "https://shop.example.com/smartphones/?page=2");
/// ```
pub fn page_url(base_url: &Url, parameter: &str, page: &str) -> Url {
    let mut url = base_url.clone();
    url.set_query(None);
    url.set_fragment(None);

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url.query_pairs_mut().append_pair(parameter, page);
    url
}
