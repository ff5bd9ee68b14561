//! HTTP document fetching
//!
//! This module handles all HTTP requests for a harvest, including:
//! - Building HTTP clients with proper user agent strings
//! - GET requests to fetch listing pages
//! - Error classification

use crate::config::{FetchConfig, UserAgentConfig};
use crate::HarvestError;
use reqwest::Client;
use scraper::Html;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// A fetched listing page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects, used to resolve relative links
    pub url: Url,

    /// Page body content
    pub body: String,
}

impl FetchedPage {
    /// Parses the body into a queryable document
    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// Source of listing documents
///
/// The harvester issues one call per page and treats any error as fatal.
pub trait DocumentFetcher {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<FetchedPage, HarvestError>>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `fetch` - Timeouts for each request
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    fetch: &FetchConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_string(user_agent))
        .timeout(Duration::from_secs(fetch.timeout_secs))
        .connect_timeout(Duration::from_secs(fetch.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Formats the user agent as `CrawlerName/Version (+ContactURL; ContactEmail)`
pub fn user_agent_string(config: &UserAgentConfig) -> String {
    format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    )
}

/// Fetches listing pages over HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &UserAgentConfig, fetch: &FetchConfig) -> Result<Self, HarvestError> {
        Ok(Self {
            client: build_http_client(user_agent, fetch)?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl DocumentFetcher for HttpFetcher {
    /// Fetches a URL, failing on transport errors and non-success statuses
    ///
    /// No retries are attempted.
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, HarvestError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let body = response.text().await.map_err(|e| classify_error(url, e))?;

        tracing::debug!("Fetched {} ({} bytes)", final_url, body.len());

        Ok(FetchedPage {
            url: final_url,
            body,
        })
    }
}

fn classify_error(url: &Url, error: reqwest::Error) -> HarvestError {
    if error.is_timeout() {
        HarvestError::Timeout {
            url: url.to_string(),
        }
    } else {
        HarvestError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
