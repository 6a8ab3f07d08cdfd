//! Product listing and product JSON parsing
//!
//! This module handles:
//! - Finding product links on a storefront's product listing page
//! - Turning those links into URLs of the products' JSON representation
//! - Reading title and primary image from a product JSON payload

use crate::state::Product;
use crate::url::{convert_to_absolute_url, url_to_json_url};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::Value;

/// Product link selectors, most specific theme markup first
///
/// The first selector matching anything wins; later ones are not consulted.
const PRODUCT_SELECTORS: &[&str] = &[
    ".product-item a[href]",
    "a.product-item__title[href]",
    "a.grid-product__link[href]",
    "a.grid-view-item__link[href]",
    ".product-card a[href]",
    ".grid__item a[href*='/products/']",
    "a[href*='/products/']",
];

static PRODUCT_LINK_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    PRODUCT_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("valid product link selector"))
        .collect()
});

/// Extracts up to `max_count` product links from a listing page
///
/// Selectors are tried in priority order; links come from the first one that
/// matches any element, in document order.
///
/// # Example
///
/// ```
/// use storefront_harvester::crawler::extract_product_links;
///
/// let html = r#"<div class="product-item"><a href="/products/a"></a><a href="/products/b"></a></div>"#;
/// assert_eq!(extract_product_links(html, 1), vec!["/products/a"]);
/// ```
pub fn extract_product_links(page: &str, max_count: usize) -> Vec<String> {
    if page.trim().is_empty() || max_count == 0 {
        return Vec::new();
    }

    let document = Html::parse_document(page);

    for selector in PRODUCT_LINK_SELECTORS.iter() {
        let links: Vec<String> = document
            .select(selector)
            .filter_map(|element| element.value().attr("href"))
            .take(max_count)
            .map(ToString::to_string)
            .collect();

        // do not try further selectors if some products found
        if !links.is_empty() {
            return links;
        }
    }

    Vec::new()
}

/// Resolves product links against `domain` and maps them to JSON URLs
///
/// Never fails: a link that cannot be resolved still yields a URL, and only
/// the fetch of that URL fails.
pub fn product_links_to_json_urls(links: &[String], domain: &str, scheme: &str) -> Vec<String> {
    links
        .iter()
        .map(|link| url_to_json_url(&convert_to_absolute_url(link, domain, scheme)))
        .collect()
}

/// Finds product JSON URLs on a listing page. See [`extract_product_links`].
pub fn get_product_json_urls(
    page: &str,
    domain: &str,
    scheme: &str,
    max_count: usize,
) -> Vec<String> {
    product_links_to_json_urls(&extract_product_links(page, max_count), domain, scheme)
}

/// Reads a string at `key`, or "" when absent or not a string
fn str_field(value: Option<&Value>, key: &str) -> String {
    value
        .and_then(|v| v.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// URL of the first entry of an `images` array
///
/// Entries are either plain URL strings or objects carrying the URL in `src`.
fn first_image_url(images: Option<&Value>) -> String {
    match images.and_then(|images| images.get(0)) {
        Some(Value::String(url)) => url.clone(),
        Some(image) => str_field(Some(image), "src"),
        None => String::new(),
    }
}

/// Builds a [`Product`] from a product JSON payload
///
/// Accepts the wrapped shape `{"product": {"title", "images": [{"src"}]}}` and
/// the flat shape `{"title", "images": [...]}`. Missing or malformed parts
/// default to an empty string; this never fails.
pub fn extract_product_record(payload: &Value) -> Product {
    let product = payload.get("product").filter(|p| p.is_object()).or(Some(payload));

    Product {
        title: str_field(product, "title"),
        image_url: first_image_url(product.and_then(|p| p.get("images"))),
    }
}
