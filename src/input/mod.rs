//! Input module for reading the domain list
//!
//! The input is a CSV table with a header row; one named column holds a bare
//! domain per row.

use crate::HarvestError;
use std::io::Read;
use std::path::Path;

/// Reads domains from the `column` column of the CSV file at `path`
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Domains in file order
/// * `Err(HarvestError)` - File unreadable, malformed, or column missing
pub fn read_domains(path: &Path, column: &str) -> Result<Vec<String>, HarvestError> {
    tracing::info!("Reading domain data from {}", path.display());
    let file = std::fs::File::open(path)?;
    read_domains_from(file, column, &path.display().to_string())
}

/// Reads domains from any CSV source; `source` names it in errors and logs
pub fn read_domains_from<R: Read>(
    reader: R,
    column: &str,
    source: &str,
) -> Result<Vec<String>, HarvestError> {
    // rows may be shorter or longer than the header
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let index = csv_reader
        .headers()?
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| HarvestError::MissingColumn {
            column: column.to_string(),
            path: source.to_string(),
        })?;

    let mut domains = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = record?;
        match record.get(index).map(str::trim) {
            Some(domain) if !domain.is_empty() => domains.push(domain.to_string()),
            _ => tracing::warn!("{}: row {} has no domain, skipping", source, line + 1),
        }
    }

    Ok(domains)
}
