//! Harvest coordinator - main run orchestration logic
//!
//! This module drives a complete harvest:
//! - Fetching the root listing and discovering its pages
//! - Fetching each page in discovery order
//! - Crawling each page into the catalog
//! - Handing the finished catalog to an output writer

use crate::catalog::Catalog;
use crate::config::{validate, Config};
use crate::crawler::fetcher::{DocumentFetcher, HttpFetcher};
use crate::crawler::page::crawl_page;
use crate::crawler::pagination::{discover_pages, page_url};
use crate::extract::{CatalogSelectors, ProductExtractor};
use crate::output::{OutputWriter, RunStatistics};
use crate::HarvestError;
use chrono::NaiveDate;
use url::Url;

/// Result of a completed harvest
#[derive(Debug)]
pub struct HarvestOutcome {
    /// Deduplicated records in the order they were first produced
    pub catalog: Catalog,

    /// Counters collected along the way
    pub stats: RunStatistics,
}

/// Main harvest structure
///
/// Pages are fetched and crawled strictly one after another. Any fetch
/// failure aborts the harvest.
pub struct Harvester<F = HttpFetcher> {
    config: Config,
    fetcher: F,
    extractor: ProductExtractor,
    base_url: Url,
}

impl Harvester<HttpFetcher> {
    /// Creates a harvester fetching over HTTP
    ///
    /// # Arguments
    ///
    /// * `config` - The harvest configuration
    /// * `reference_date` - Date that relative shipping phrases count from
    pub fn new(config: Config, reference_date: NaiveDate) -> Result<Self, HarvestError> {
        let fetcher = HttpFetcher::new(&config.user_agent, &config.fetch)?;
        Self::with_fetcher(config, fetcher, reference_date)
    }
}

impl<F: DocumentFetcher> Harvester<F> {
    /// Creates a harvester using the given document fetcher
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Configuration is valid
    /// * `Err(HarvestError::Config)` - Configuration failed validation
    pub fn with_fetcher(
        config: Config,
        fetcher: F,
        reference_date: NaiveDate,
    ) -> Result<Self, HarvestError> {
        validate(&config)?;

        let base_url = Url::parse(&config.site.base_url)?;
        let selectors = CatalogSelectors::compile(&config.selectors)?;
        let extractor =
            ProductExtractor::new(selectors, &config.site.currency_symbol, reference_date);

        Ok(Self {
            config,
            fetcher,
            extractor,
            base_url,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the harvest and returns the catalog
    ///
    /// 1. Fetches the root listing
    /// 2. Discovers page identifiers from its navigation
    /// 3. Fetches and crawls each page in discovery order
    pub async fn harvest(&self) -> Result<HarvestOutcome, HarvestError> {
        let mut catalog = Catalog::new();
        let mut stats = RunStatistics::new();
        let start_time = std::time::Instant::now();

        tracing::info!("Fetching listing root: {}", self.base_url);
        let root = self.fetcher.fetch(&self.base_url).await?;

        let pages = discover_pages(&root.document(), &self.extractor.selectors().pagination);
        stats.pages_discovered = pages.len() as u64;

        if pages.is_empty() {
            tracing::warn!("No page navigation found on {}, nothing to crawl", root.url);
        } else {
            tracing::info!("Discovered {} pages: {}", pages.len(), pages.join(", "));
        }

        for page in &pages {
            let url = page_url(&self.base_url, &self.config.site.page_parameter, page);
            tracing::debug!("Fetching page {}: {}", page, url);

            let fetched = self.fetcher.fetch(&url).await?;
            let report = crawl_page(&fetched.document(), &fetched.url, &self.extractor, &mut catalog);

            tracing::info!(
                "Page {}: {} products, {} new, {} duplicates, {} skipped",
                page,
                report.fragments,
                report.inserted,
                report.duplicates,
                report.failures
            );
            stats.record_page(&report);
        }

        tracing::info!(
            "Harvest completed: {} records from {} pages in {:?}",
            catalog.len(),
            stats.pages_crawled,
            start_time.elapsed()
        );

        Ok(HarvestOutcome { catalog, stats })
    }
}

/// Runs a harvest and writes its catalog
///
/// The writer is called exactly once, and only if every page was fetched.
pub async fn run_harvest<F, W>(
    harvester: &Harvester<F>,
    writer: &W,
) -> Result<RunStatistics, HarvestError>
where
    F: DocumentFetcher,
    W: OutputWriter + ?Sized,
{
    let outcome = harvester.harvest().await?;
    writer.write(outcome.catalog.records())?;
    Ok(outcome.stats)
}
