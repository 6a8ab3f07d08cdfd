//! Storefront Harvester: contact and product data from storefront domains
//!
//! This crate crawls a list of storefront domains, fetches a small fixed set of
//! contact pages and the product listing for each, extracts emails, social links
//! and a bounded number of product records, and writes one row per domain.

pub mod config;
pub mod crawler;
pub mod input;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for harvesting operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid collection stage transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::CollectionStage,
        to: state::CollectionStage,
    },

    #[error("Input column '{column}' not found in {path}")]
    MissingColumn { column: String, path: String },

    #[error("Table error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
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
}

/// Result type alias for harvesting operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{collect_domain, run_batch, HttpFetcher, PageFetcher};
pub use state::{CollectionStage, DomainResult, Product};
