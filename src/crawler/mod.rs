//! Crawler module for listing page fetching and processing
//!
//! This module contains the core harvesting logic, including:
//! - HTTP fetching of listing documents
//! - Page discovery from the listing navigation
//! - Per-page product extraction into the catalog
//! - Overall run coordination

mod coordinator;
mod fetcher;
mod page;
mod pagination;

pub use coordinator::{run_harvest, HarvestOutcome, Harvester};
pub use fetcher::{
    build_http_client, user_agent_string, DocumentFetcher, FetchedPage, HttpFetcher,
};
pub use page::{crawl_page, PageReport};
pub use pagination::{discover_pages, page_url};

use crate::config::Config;
use crate::output::{JsonFileWriter, RunStatistics};
use crate::HarvestError;
use chrono::NaiveDate;

/// Runs a complete harvest and writes the catalog file
///
/// This is the main entry point for a run. It will:
/// 1. Build the HTTP client
/// 2. Fetch the root listing and discover its pages
/// 3. Crawl every page into the catalog
/// 4. Write the catalog to the configured output path
///
/// # Arguments
///
/// * `config` - The harvest configuration
/// * `reference_date` - Date that "tomorrow" in shipping text counts from
///
/// # Returns
///
/// * `Ok(RunStatistics)` - Harvest completed and the file was written
/// * `Err(HarvestError)` - Harvest failed; no file was written
pub async fn harvest(
    config: Config,
    reference_date: NaiveDate,
) -> Result<RunStatistics, HarvestError> {
    let writer = JsonFileWriter::new(&config.output.path);
    let harvester = Harvester::new(config, reference_date)?;
    run_harvest(&harvester, &writer).await
}
