//! Output module for the harvested catalog
//!
//! This module handles:
//! - Writing the final catalog as a JSON file
//! - Recording and printing run statistics

mod json;
pub mod stats;
mod traits;

pub use json::{format_catalog_json, JsonFileWriter};
pub use stats::{format_statistics, print_statistics, RunStatistics};
pub use traits::{OutputError, OutputResult, OutputWriter};
