use super::{ExtractError, ProductExtractor};
use crate::catalog::ProductRecord;
use scraper::ElementRef;
use url::Url;

/// Candidates produced from one product card
#[derive(Debug, Default)]
pub struct VariantExpansion {
    /// One record per colour marker, in document order
    pub candidates: Vec<ProductRecord>,

    /// Colours whose record could not be extracted
    pub failures: Vec<(String, ExtractError)>,
}

/// Expands a product card into one candidate per colour marker
///
/// Cards without colour markers yield no candidates. Markers lacking the
/// colour attribute are ignored.
pub fn expand_variants(
    extractor: &ProductExtractor,
    fragment: ElementRef<'_>,
    page_url: &Url,
) -> VariantExpansion {
    let selectors = extractor.selectors();
    let mut expansion = VariantExpansion::default();

    let colours = fragment
        .select(&selectors.colour)
        .filter_map(|marker| marker.value().attr(&selectors.colour_attribute));

    for colour in colours {
        match extractor.extract(fragment, colour, page_url) {
            Ok(record) => expansion.candidates.push(record),
            Err(e) => expansion.failures.push((colour.to_string(), e)),
        }
    }

    expansion
}
