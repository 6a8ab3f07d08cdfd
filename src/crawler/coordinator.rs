//! Batch coordinator - runs domain collections concurrently
//!
//! One task is spawned per domain. Tasks share the configuration and the
//! fetcher read-only and never touch each other's results. A failing or
//! panicking task only loses its own row.

use crate::config::Config;
use crate::crawler::collector::collect_domain;
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::input::read_domains;
use crate::output::{CsvOutputHandler, HarvestStatistics, OutputHandler};
use crate::state::DomainResult;
use crate::HarvestError;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Collects all `domains` concurrently
///
/// Results are returned in completion order. Domains whose collection failed
/// are logged and left out.
pub async fn run_batch<F>(
    domains: Vec<String>,
    config: Arc<Config>,
    fetcher: Arc<F>,
) -> Vec<DomainResult>
where
    F: PageFetcher + 'static,
{
    let mut tasks = JoinSet::new();

    for domain in domains {
        let config = Arc::clone(&config);
        let fetcher = Arc::clone(&fetcher);
        tasks.spawn(async move {
            let result = collect_domain(&domain, &config, fetcher.as_ref()).await;
            (domain, result)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    let mut failed = 0;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(result))) => results.push(result),
            Ok((domain, Err(e))) => {
                tracing::warn!("Skipping {}: {}", domain, e);
                failed += 1;
            }
            Err(e) => {
                tracing::error!("Domain task aborted: {}", e);
                failed += 1;
            }
        }
    }

    tracing::info!("Collected {} domains, {} failed", results.len(), failed);
    results
}

/// Reads domains from `in_file`, collects them and writes `out_file`
///
/// The input and output tables are handled on blocking threads so domain
/// tasks keep running on the async runtime.
pub async fn harvest(
    config: Config,
    in_file: PathBuf,
    out_file: PathBuf,
) -> Result<HarvestStatistics, HarvestError> {
    let config = Arc::new(config);
    let fetcher = Arc::new(HttpFetcher::from_config(&config.user_agent)?);

    let column = config.input.column.clone();
    let domains = tokio::task::spawn_blocking(move || read_domains(&in_file, &column)).await??;
    let domains_read = domains.len();
    tracing::info!("Read {} domains", domains_read);

    let results = run_batch(domains, Arc::clone(&config), fetcher).await;
    let stats = HarvestStatistics::from_results(domains_read, &results);

    let product_count = config.crawler.product_count;
    tokio::task::spawn_blocking(move || {
        CsvOutputHandler::new(out_file, product_count).write_results(&results)
    })
    .await??;

    Ok(stats)
}
