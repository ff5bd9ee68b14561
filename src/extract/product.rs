use super::{element_text, CatalogSelectors, ExtractError};
use crate::catalog::ProductRecord;
use crate::normalize::{normalize_availability, normalize_capacity, normalize_shipping_date};
use chrono::NaiveDate;
use scraper::{ElementRef, Selector};
use url::Url;

/// Extracts product records from product cards
#[derive(Debug, Clone)]
pub struct ProductExtractor {
    selectors: CatalogSelectors,
    currency_symbol: String,
    reference_date: NaiveDate,
}

impl ProductExtractor {
    /// Creates an extractor
    ///
    /// # Arguments
    ///
    /// * `selectors` - Compiled field selectors
    /// * `currency_symbol` - Symbol stripped from the left of prices
    /// * `reference_date` - Date that relative shipping phrases count from
    pub fn new(selectors: CatalogSelectors, currency_symbol: &str, reference_date: NaiveDate) -> Self {
        Self {
            selectors,
            currency_symbol: currency_symbol.to_string(),
            reference_date,
        }
    }

    pub fn selectors(&self) -> &CatalogSelectors {
        &self.selectors
    }

    /// Builds the record for one colour of a product card
    ///
    /// Name, price, capacity, availability and image are required. The
    /// shipping text is optional and defaults to an empty string.
    ///
    /// # Arguments
    ///
    /// * `fragment` - The product card element
    /// * `colour` - The colour this record describes
    /// * `page_url` - URL of the page, used to resolve the image source
    pub fn extract(
        &self,
        fragment: ElementRef<'_>,
        colour: &str,
        page_url: &Url,
    ) -> Result<ProductRecord, ExtractError> {
        let title = required_text(fragment, &self.selectors.name, "name")?;
        let price = self.parse_price(&required_text(fragment, &self.selectors.price, "price")?)?;
        let capacity_mb =
            normalize_capacity(&required_text(fragment, &self.selectors.capacity, "capacity")?)?;
        let availability = normalize_availability(&required_text(
            fragment,
            &self.selectors.availability,
            "availability",
        )?);

        let shipping_text = fragment
            .select(&self.selectors.shipping)
            .nth(self.selectors.shipping_index)
            .map(element_text)
            .unwrap_or_default();
        let shipping_date = normalize_shipping_date(&shipping_text, self.reference_date);

        let image_url = self.image_url(fragment, page_url)?;

        Ok(ProductRecord {
            title,
            price,
            image_url,
            capacity_mb,
            colour: colour.to_string(),
            availability_text: availability.text,
            is_available: availability.is_available,
            shipping_text,
            shipping_date,
        })
    }

    fn parse_price(&self, raw: &str) -> Result<f64, ExtractError> {
        raw.trim_start_matches(self.currency_symbol.as_str())
            .trim()
            .parse()
            .map_err(|_| ExtractError::InvalidPrice {
                raw: raw.to_string(),
            })
    }

    /// Resolves the card's image source against the page URL
    fn image_url(&self, fragment: ElementRef<'_>, page_url: &Url) -> Result<String, ExtractError> {
        let src = fragment
            .select(&self.selectors.image)
            .next()
            .and_then(|img| img.value().attr("src"))
            .ok_or(ExtractError::MissingField { field: "image" })?;

        page_url
            .join(src.trim())
            .map(String::from)
            .map_err(|source| ExtractError::InvalidImageUrl {
                src: src.to_string(),
                source,
            })
    }
}

/// Text of the first match of `selector`, or a missing-field error
fn required_text(
    fragment: ElementRef<'_>,
    selector: &Selector,
    field: &'static str,
) -> Result<String, ExtractError> {
    fragment
        .select(selector)
        .next()
        .map(element_text)
        .ok_or(ExtractError::MissingField { field })
}
