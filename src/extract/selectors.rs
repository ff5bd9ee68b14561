use crate::config::SelectorConfig;
use crate::ConfigError;
use scraper::Selector;

/// Compiled form of [`SelectorConfig`]
#[derive(Debug, Clone)]
pub struct CatalogSelectors {
    pub pagination: Selector,
    pub product: Selector,
    pub colour: Selector,
    pub colour_attribute: String,
    pub name: Selector,
    pub price: Selector,
    pub capacity: Selector,
    pub availability: Selector,
    pub shipping: Selector,
    pub shipping_index: usize,
    pub image: Selector,
}

impl CatalogSelectors {
    /// Compiles every configured selector
    ///
    /// # Returns
    ///
    /// * `Ok(CatalogSelectors)` - All selectors compiled
    /// * `Err(ConfigError::InvalidSelector)` - The first selector that failed, by field
    pub fn compile(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            pagination: compile("pagination", &config.pagination)?,
            product: compile("product", &config.product)?,
            colour: compile("colour", &config.colour)?,
            colour_attribute: config.colour_attribute.clone(),
            name: compile("name", &config.name)?,
            price: compile("price", &config.price)?,
            capacity: compile("capacity", &config.capacity)?,
            availability: compile("availability", &config.availability)?,
            shipping: compile("shipping", &config.shipping)?,
            shipping_index: config.shipping_index,
            image: compile("image", &config.image)?,
        })
    }
}

fn compile(field: &str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| {
        ConfigError::InvalidSelector(format!("for {}: '{}': {}", field, selector, e))
    })
}
