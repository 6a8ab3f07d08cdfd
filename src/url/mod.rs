//! URL handling module
//!
//! Builds absolute page URLs from a bare domain and a path, resolves product
//! links that may be relative, and maps product page URLs to their JSON form.

mod build;

pub use build::{convert_to_absolute_url, get_url, get_urls, url_to_json_url};
