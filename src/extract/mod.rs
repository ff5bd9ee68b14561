//! Product extraction from listing page fragments
//!
//! This module turns one product card into candidate records:
//! - compiling the configured CSS selectors
//! - extracting and normalizing the fields of one card for one colour
//! - expanding a card into one candidate per colour variant

mod product;
mod selectors;
mod variants;

pub use product::ProductExtractor;
pub use selectors::CatalogSelectors;
pub use variants::{expand_variants, VariantExpansion};

use crate::normalize::CapacityError;
use scraper::ElementRef;
use thiserror::Error;

/// Reasons a single product card could not become a record
///
/// These never abort a page: the card is logged and skipped.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("invalid price '{raw}'")]
    InvalidPrice { raw: String },

    #[error("invalid image URL '{src}': {source}")]
    InvalidImageUrl {
        src: String,
        source: url::ParseError,
    },

    #[error("invalid capacity: {0}")]
    Capacity(#[from] CapacityError),
}

/// Returns the text of an element with whitespace runs collapsed
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_element_text_collapses_whitespace() {
        let html = Html::parse_fragment("<div>  Availability:\n   <b>In</b>   Stock  </div>");
        let selector = Selector::parse("div").unwrap();
        let element = html.select(&selector).next().unwrap();
        assert_eq!(element_text(element), "Availability: In Stock");
    }
}
