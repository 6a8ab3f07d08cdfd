use crate::config::types::{Config, CrawlerConfig, InputConfig, UserAgentConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_input_config(&config.input)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if !config.throttle_delay.is_finite() || config.throttle_delay < 0.0 {
        return Err(ConfigError::Validation(format!(
            "throttle_delay must be a non-negative number of seconds, got {}",
            config.throttle_delay
        )));
    }

    for path in &config.contact_paths {
        validate_path("contact_paths", path)?;
    }
    validate_path("product_list_path", &config.product_list_path)?;

    if config.scheme != "https" && config.scheme != "http" {
        return Err(ConfigError::Validation(format!(
            "scheme must be 'https' or 'http', got '{}'",
            config.scheme
        )));
    }

    Ok(())
}

/// Paths are appended verbatim to a bare host, so they must be rooted and
/// carry no query or fragment
fn validate_path(field: &str, path: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{} entries must start with '/', got '{}'",
            field, path
        )));
    }
    if path.contains(['?', '#']) {
        return Err(ConfigError::Validation(format!(
            "{} entries must not contain a query or fragment, got '{}'",
            field, path
        )));
    }
    Ok(())
}

fn validate_input_config(config: &InputConfig) -> Result<(), ConfigError> {
    if config.column.trim().is_empty() {
        return Err(ConfigError::Validation(
            "input column cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Ok(())
}
