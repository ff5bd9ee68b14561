//! Run statistics
//!
//! Counters accumulated over a harvest and printed once it finishes.

use crate::crawler::PageReport;

/// Harvest statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Page identifiers found in the listing navigation
    pub pages_discovered: u64,

    /// Pages fetched and crawled
    pub pages_crawled: u64,

    /// Product cards seen across all pages
    pub fragments_seen: u64,

    /// Candidate records produced by variant expansion
    pub candidates_produced: u64,

    /// Records accepted into the catalog
    pub records_inserted: u64,

    /// Candidates rejected as duplicates
    pub duplicates_rejected: u64,

    /// Variants skipped because extraction failed
    pub extraction_failures: u64,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one crawled page's report
    pub fn record_page(&mut self, report: &PageReport) {
        self.pages_crawled += 1;
        self.fragments_seen += report.fragments;
        self.candidates_produced += report.candidates;
        self.records_inserted += report.inserted;
        self.duplicates_rejected += report.duplicates;
        self.extraction_failures += report.failures;
    }

    /// Returns the share of candidates rejected as duplicates, as a percentage
    pub fn duplicate_rate(&self) -> f64 {
        if self.candidates_produced == 0 {
            return 0.0;
        }
        (self.duplicates_rejected as f64 / self.candidates_produced as f64) * 100.0
    }
}

/// Formats statistics for the terminal
pub fn format_statistics(stats: &RunStatistics) -> String {
    let mut out = String::new();

    out.push_str("=== Harvest Statistics ===\n\n");
    out.push_str(&format!(
        "Pages: {} crawled of {} discovered\n",
        stats.pages_crawled, stats.pages_discovered
    ));
    out.push_str(&format!("Product cards: {}\n", stats.fragments_seen));
    out.push_str(&format!("Candidates: {}\n", stats.candidates_produced));
    out.push_str(&format!("  Inserted: {}\n", stats.records_inserted));
    out.push_str(&format!(
        "  Duplicates: {} ({:.2}%)\n",
        stats.duplicates_rejected,
        stats.duplicate_rate()
    ));
    out.push_str(&format!(
        "Extraction failures: {}\n",
        stats.extraction_failures
    ));

    out
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &RunStatistics) {
    print!("{}", format_statistics(stats));
}
