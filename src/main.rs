//! Listing Harvester main entry point
//!
//! This is the command-line interface for the listing harvester.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use listing_harvester::config::{load_config_with_hash, validate, Config};
use listing_harvester::crawler::harvest;
use listing_harvester::output::print_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Listing Harvester: a product catalog extractor
///
/// Walks every page of a product listing, expands each product into its
/// colour variants, normalizes capacity, availability and shipping dates,
/// and writes the deduplicated catalog as JSON.
#[derive(Parser, Debug)]
#[command(name = "listing-harvester")]
#[command(version)]
#[command(about = "Extracts a product catalog from a paginated listing", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output file, overriding the configured path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Date that relative shipping phrases count from (YYYY-MM-DD, default today)
    #[arg(long, value_name = "DATE")]
    reference_date: Option<NaiveDate>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be harvested without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load(cli.config.as_deref())?;
    if let Some(output) = &cli.output {
        config.output.path = output.display().to_string();
        validate(&config).context("Invalid output path")?;
    }

    let reference_date = cli
        .reference_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    if cli.dry_run {
        handle_dry_run(&config, reference_date);
        return Ok(());
    }

    handle_harvest(config, reference_date, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("listing_harvester=info,warn"),
            1 => EnvFilter::new("listing_harvester=debug,info"),
            2 => EnvFilter::new("listing_harvester=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, or the built-in defaults without one
fn load(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Handles the --dry-run mode: shows what would be harvested
fn handle_dry_run(config: &Config, reference_date: NaiveDate) {
    println!("=== Listing Harvester Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!(
        "  Page URLs: {}/?{}=<page>",
        config.site.base_url.trim_end_matches('/'),
        config.site.page_parameter
    );
    println!("  Currency symbol: {}", config.site.currency_symbol);
    println!("  Reference date: {}", reference_date);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nFetch:");
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  Connect timeout: {}s", config.fetch.connect_timeout_secs);

    println!("\nSelectors:");
    let selectors = &config.selectors;
    println!("  Pagination: {}", selectors.pagination);
    println!("  Product: {}", selectors.product);
    println!("  Colour: {} [{}]", selectors.colour, selectors.colour_attribute);
    println!("  Name: {}", selectors.name);
    println!("  Price: {}", selectors.price);
    println!("  Capacity: {}", selectors.capacity);
    println!("  Availability: {}", selectors.availability);
    println!("  Shipping: {} (match #{})", selectors.shipping, selectors.shipping_index);
    println!("  Image: {}", selectors.image);

    println!("\nOutput: {}", config.output.path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main harvest operation
async fn handle_harvest(config: Config, reference_date: NaiveDate, quiet: bool) -> anyhow::Result<()> {
    tracing::info!(
        "Starting harvest of {} (reference date {})",
        config.site.base_url,
        reference_date
    );

    match harvest(config, reference_date).await {
        Ok(stats) => {
            tracing::info!("Harvest completed successfully");
            if !quiet {
                print_statistics(&stats);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e).context("Harvest failed")
        }
    }
}
