//! Listing Harvester: a product catalog extractor for paginated listings
//!
//! This crate walks a paginated HTML product listing, expands every product
//! card into one record per colour variant, normalizes the loosely formatted
//! fields (capacity, availability, shipping date) and emits a deduplicated,
//! insertion-ordered catalog.

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod normalize;
pub mod output;

use thiserror::Error;

/// Main error type for a harvest run
///
/// Every variant is fatal to the run. Problems local to a single product
/// card are reported through [`extract::ExtractError`] instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector {0}")]
    InvalidSelector(String),
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{Catalog, IdentityKey, ProductRecord};
pub use config::Config;
pub use crawler::{run_harvest, HarvestOutcome, Harvester};
pub use normalize::{normalize_availability, normalize_capacity, normalize_shipping_date};
