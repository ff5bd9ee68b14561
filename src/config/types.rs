use serde::Deserialize;

/// Main configuration structure for a harvest run
///
/// Every section falls back to defaults describing the reference smartphone
/// listing, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// The listing being harvested
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root listing URL; page URLs are `<base-url>/?<page-parameter>=<page>`
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Query parameter carrying the page identifier
    #[serde(rename = "page-parameter")]
    pub page_parameter: String,

    /// Currency symbol stripped from the left of prices
    #[serde(rename = "currency-symbol")]
    pub currency_symbol: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.magpiehq.com/developer-challenge/smartphones".to_string(),
            page_parameter: "page".to_string(),
            currency_symbol: "£".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "ListingHarvester".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }
}

/// HTTP fetch behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the JSON catalog file
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "output.json".to_string(),
        }
    }
}

/// CSS selectors locating each field on a listing page
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Page-index links on the root listing
    pub pagination: String,

    /// One product card
    pub product: String,

    /// Colour markers inside a card
    pub colour: String,

    /// Attribute of a colour marker holding the colour name
    #[serde(rename = "colour-attribute")]
    pub colour_attribute: String,

    pub name: String,
    pub price: String,
    pub capacity: String,
    pub availability: String,

    /// Text blocks of which one holds the shipping text
    pub shipping: String,

    /// Which `shipping` match holds the shipping text
    #[serde(rename = "shipping-index")]
    pub shipping_index: usize,

    pub image: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            pagination: "#pages a".to_string(),
            product: "div .product".to_string(),
            colour: "span[data-colour]".to_string(),
            colour_attribute: "data-colour".to_string(),
            name: ".product-name".to_string(),
            price: ".my-8.block.text-center.text-lg".to_string(),
            capacity: ".product-capacity".to_string(),
            availability: ".product .bg-white div:nth-child(5)".to_string(),
            shipping: ".my-4.text-sm.block.text-center".to_string(),
            shipping_index: 1,
            image: "img".to_string(),
        }
    }
}
