//! Crawling of a single listing page

use crate::catalog::Catalog;
use crate::extract::{expand_variants, ProductExtractor};
use scraper::Html;
use url::Url;

/// What one page contributed to the catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageReport {
    /// Product cards found on the page
    pub fragments: u64,

    /// Candidate records produced by variant expansion
    pub candidates: u64,

    /// Candidates accepted into the catalog
    pub inserted: u64,

    /// Candidates rejected as duplicates
    pub duplicates: u64,

    /// Variants skipped because extraction failed
    pub failures: u64,
}

/// Extracts every product card on a page into the catalog
///
/// Cards are visited in document order and their candidates offered to the
/// catalog in colour order. A card that fails to extract is logged and
/// skipped; it never stops the page.
pub fn crawl_page(
    document: &Html,
    page_url: &Url,
    extractor: &ProductExtractor,
    catalog: &mut Catalog,
) -> PageReport {
    let mut report = PageReport::default();

    for fragment in document.select(&extractor.selectors().product) {
        report.fragments += 1;

        let expansion = expand_variants(extractor, fragment, page_url);

        for (colour, error) in &expansion.failures {
            tracing::warn!(
                "Skipping product #{} ({}) on {}: {}",
                report.fragments,
                colour,
                page_url,
                error
            );
        }
        report.failures += expansion.failures.len() as u64;

        for candidate in expansion.candidates {
            report.candidates += 1;

            let title = candidate.title.clone();
            let colour = candidate.colour.clone();
            if catalog.try_insert(candidate) {
                report.inserted += 1;
            } else {
                report.duplicates += 1;
                tracing::debug!("Duplicate product skipped: {} ({})", title, colour);
            }
        }
    }

    report
}
