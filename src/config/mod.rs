//! Configuration module
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; a missing file section falls back to the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use storefront_harvester::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvester.toml")).unwrap();
//! println!("Products per domain: {}", config.crawler.product_count);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, InputConfig, UserAgentConfig, DEFAULT_CONTACT_PATHS,
    DEFAULT_INPUT_COLUMN, DEFAULT_PRODUCT_COUNT, DEFAULT_PRODUCT_LIST_PATH, DEFAULT_SCHEME,
    DEFAULT_THROTTLE_DELAY, HTTP_TIMEOUT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
