//! Crawler module for fetching storefront pages and extracting data
//!
//! This module contains the per-domain collection pipeline:
//! - HTTP fetching behind the `PageFetcher` trait
//! - Throttled streaming of page lists
//! - Contact and product extraction
//! - Per-domain collection and concurrent batch coordination

mod collector;
mod coordinator;
mod extract;
mod fetcher;
mod parser;
mod throttle;

pub use collector::collect_domain;
pub use coordinator::{harvest, run_batch};
pub use extract::{extract_emails, extract_social_links, SocialPlatform};
pub use fetcher::{build_http_client, ContentKind, FetchError, HttpFetcher, PageContent, PageFetcher};
pub use parser::{
    extract_product_links, extract_product_record, get_product_json_urls,
    product_links_to_json_urls,
};
pub use throttle::throttled_pages;
