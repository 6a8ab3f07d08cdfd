//! Domain collector
//!
//! Collects everything for one domain: contact facts from the configured
//! contact pages, then up to `product-count` products from the product
//! listing. Contact pages that fail are skipped; a product listing that fails
//! leaves the domain without products. Only unexpected errors fail the domain.

use crate::config::Config;
use crate::crawler::extract::{extract_emails, extract_social_links, SocialPlatform};
use crate::crawler::fetcher::{ContentKind, PageFetcher};
use crate::crawler::parser::{extract_product_record, get_product_json_urls};
use crate::crawler::throttle::throttled_pages;
use crate::state::{CollectionStage, DomainResult};
use crate::url::{get_url, get_urls};
use crate::HarvestError;
use futures::StreamExt;

/// Collects contact information and products for `domain`
///
/// # Arguments
///
/// * `domain` - Bare host name, e.g. `sufio.com`
/// * `config` - Shared configuration
/// * `fetcher` - Page fetcher used for every request
///
/// # Returns
///
/// * `Ok(DomainResult)` - Collection finished, possibly with partial data
/// * `Err(HarvestError)` - Collection aborted; already logged
pub async fn collect_domain<F>(
    domain: &str,
    config: &Config,
    fetcher: &F,
) -> Result<DomainResult, HarvestError>
where
    F: PageFetcher + ?Sized,
{
    tracing::info!("Getting domain data for {}", domain);

    match run_collection(domain, config, fetcher).await {
        Ok(result) => {
            tracing::debug!("Got domain data for {}: {:?}", domain, result);
            Ok(result)
        }
        Err(e) => {
            tracing::error!("Collecting {} failed: {}", domain, e);
            Err(e)
        }
    }
}

async fn run_collection<F>(
    domain: &str,
    config: &Config,
    fetcher: &F,
) -> Result<DomainResult, HarvestError>
where
    F: PageFetcher + ?Sized,
{
    let crawler = &config.crawler;
    let mut result = DomainResult::new(domain);

    // Contact pages
    result.advance(CollectionStage::FetchingContactPages)?;
    let contact_urls = get_urls(domain, &crawler.contact_paths, &crawler.scheme);
    let pages = throttled_pages(fetcher, contact_urls, crawler.throttle(), ContentKind::Html);
    futures::pin_mut!(pages);

    while let Some(page) = pages.next().await {
        let Some(text) = page.as_text() else {
            continue;
        };
        result.emails.extend(extract_emails(text));
        result
            .facebook_links
            .extend(extract_social_links(text, SocialPlatform::Facebook));
        result
            .twitter_links
            .extend(extract_social_links(text, SocialPlatform::Twitter));
    }

    // Product listing
    result.advance(CollectionStage::FetchingProductList)?;
    let product_list_url = get_url(domain, &crawler.product_list_path, &crawler.scheme);
    let product_page = match fetcher.fetch(&product_list_url, ContentKind::Html).await {
        Ok(page) => page,
        Err(e) => {
            tracing::info!("Getting products page {} failed: {}", product_list_url, e);
            result.advance(CollectionStage::Failed)?;
            return Ok(result);
        }
    };
    tokio::time::sleep(crawler.throttle()).await;

    // Product pages
    result.advance(CollectionStage::FetchingProductPages)?;
    let product_urls = get_product_json_urls(
        product_page.as_text().unwrap_or_default(),
        domain,
        &crawler.scheme,
        crawler.product_count,
    );
    tracing::debug!("Found {} product links on {}", product_urls.len(), domain);

    let products: Vec<_> =
        throttled_pages(fetcher, product_urls, crawler.throttle(), ContentKind::Json)
            .filter_map(|page| async move { page.as_json().map(extract_product_record) })
            .collect()
            .await;
    result.set_products(products, crawler.product_count);

    result.advance(CollectionStage::Done)?;
    Ok(result)
}
