//! CSV output handler
//!
//! One row per domain: the domain, its emails, Facebook and Twitter links
//! (each joined into a single cell), then a title and image column per
//! product slot.

use crate::output::traits::{OutputHandler, OutputResult};
use crate::state::DomainResult;
use std::io::Write;
use std::path::PathBuf;

/// Fixed leading columns of the output table
pub const OUTPUT_HEADER: &[&str] = &["domain", "emails", "facebook", "twitter"];

/// Separator between values of a multi-valued cell
const CELL_SEPARATOR: &str = ", ";

/// Writes results as a CSV file
pub struct CsvOutputHandler {
    path: PathBuf,
    product_count: usize,
}

impl CsvOutputHandler {
    /// Creates a handler writing to `path` with `product_count` product slots
    pub fn new(path: impl Into<PathBuf>, product_count: usize) -> Self {
        Self {
            path: path.into(),
            product_count,
        }
    }
}

impl OutputHandler for CsvOutputHandler {
    fn write_results(&self, results: &[DomainResult]) -> OutputResult<()> {
        tracing::info!("Writing domain data to {}", self.path.display());
        let file = std::fs::File::create(&self.path)?;
        write_table(file, results, self.product_count)
    }
}

/// Writes the header and one row per result to `writer`
pub fn write_table<W: Write>(
    writer: W,
    results: &[DomainResult],
    product_count: usize,
) -> OutputResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(header_row(product_count))?;
    for result in results {
        csv_writer.write_record(result_to_row(result, product_count))?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Header row sized to `product_count` product slots
pub fn header_row(product_count: usize) -> Vec<String> {
    OUTPUT_HEADER
        .iter()
        .map(|column| column.to_string())
        .chain((1..=product_count).flat_map(|i| [format!("title {}", i), format!("image {}", i)]))
        .collect()
}

/// Row for one domain, padded with empty cells to the header width
pub fn result_to_row(result: &DomainResult, product_count: usize) -> Vec<String> {
    let mut row = vec![
        result.domain.clone(),
        join_cell(&result.emails),
        join_cell(&result.facebook_links),
        join_cell(&result.twitter_links),
    ];

    for slot in 0..product_count {
        match result.products.get(slot) {
            Some(product) => {
                row.push(product.title.clone());
                row.push(product.image_url.clone());
            }
            None => row.extend([String::new(), String::new()]),
        }
    }

    row
}

fn join_cell<'a>(values: impl IntoIterator<Item = &'a String>) -> String {
    values
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}
