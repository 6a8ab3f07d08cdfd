//! Output module for writing harvest results
//!
//! This module handles:
//! - Writing one CSV row per collected domain
//! - Summarizing a run for the command line

mod csv_output;
pub mod stats;
mod traits;

pub use csv_output::{header_row, result_to_row, write_table, CsvOutputHandler, OUTPUT_HEADER};
pub use stats::{print_statistics, HarvestStatistics};
pub use traits::{OutputError, OutputHandler, OutputResult};
