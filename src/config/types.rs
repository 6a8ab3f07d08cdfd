use serde::Deserialize;
use std::time::Duration;

/// Contact pages fetched for every domain, in fetch order
pub const DEFAULT_CONTACT_PATHS: &[&str] = &[
    "/",
    "/pages/about",
    "/pages/about-us",
    "/pages/contact",
    "/pages/contact-us",
];
pub const DEFAULT_PRODUCT_LIST_PATH: &str = "/collections/all";
pub const DEFAULT_PRODUCT_COUNT: usize = 5;
pub const DEFAULT_THROTTLE_DELAY: f64 = 1.0;
pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_INPUT_COLUMN: &str = "url";

/// Per-request timeout in seconds
pub const HTTP_TIMEOUT: u64 = 5;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub input: InputConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
}

/// What to fetch for each domain and how fast
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Paths likely to carry contact information
    pub contact_paths: Vec<String>,

    /// Path of the page listing all products
    pub product_list_path: String,

    /// Maximum number of products extracted per domain
    pub product_count: usize,

    /// Pause after every request to the same domain (seconds)
    pub throttle_delay: f64,

    /// Scheme used to build page URLs ("https" or "http")
    pub scheme: String,
}

impl CrawlerConfig {
    /// Throttle delay as a `Duration`; negative or non-finite delays become zero
    pub fn throttle(&self) -> Duration {
        Duration::try_from_secs_f64(self.throttle_delay).unwrap_or_default()
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            contact_paths: DEFAULT_CONTACT_PATHS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            product_list_path: DEFAULT_PRODUCT_LIST_PATH.to_string(),
            product_count: DEFAULT_PRODUCT_COUNT,
            throttle_delay: DEFAULT_THROTTLE_DELAY,
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

/// Input table configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Header of the column holding bare domain names
    pub column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            column: DEFAULT_INPUT_COLUMN.to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UserAgentConfig {
    /// Name of the crawler
    pub crawler_name: String,

    /// Version of the crawler
    pub crawler_version: String,
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value: `Name/Version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
