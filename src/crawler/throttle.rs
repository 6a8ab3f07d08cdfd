//! Throttled page source
//!
//! Turns an ordered list of URLs into a lazy stream of fetched pages. Every
//! fetch attempt, successful or not, is followed by a pause of the throttle
//! delay, which keeps the request rate to a single host bounded. Failed
//! fetches are logged and skipped.

use crate::crawler::fetcher::{ContentKind, PageContent, PageFetcher};
use futures::stream::{self, Stream};
use std::time::Duration;

/// Streams the successfully fetched pages of `urls`, in input order
///
/// The stream is finite and can be consumed once. Nothing is requested until
/// the stream is polled.
///
/// # Arguments
///
/// * `fetcher` - The page fetcher to use
/// * `urls` - URLs to fetch, in order
/// * `delay` - Pause after each fetch attempt
/// * `kind` - Whether bodies are HTML text or JSON
pub fn throttled_pages<'a, F>(
    fetcher: &'a F,
    urls: Vec<String>,
    delay: Duration,
    kind: ContentKind,
) -> impl Stream<Item = PageContent> + 'a
where
    F: PageFetcher + ?Sized,
{
    stream::unfold(urls.into_iter(), move |mut remaining| async move {
        while let Some(url) = remaining.next() {
            let result = fetcher.fetch(&url, kind).await;

            // throttle even if the request fails
            tokio::time::sleep(delay).await;

            match result {
                Ok(page) => return Some((page, remaining)),
                Err(e) => tracing::info!("Getting page {} failed: {}", url, e),
            }
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::fetcher::FetchError;
    use async_trait::async_trait;
    use futures::StreamExt;
    use std::sync::Mutex;
    use tokio::time::Instant;

    /// Serves pages whose URL ends with "ok", fails everything else
    #[derive(Default)]
    struct ScriptedFetcher {
        requested: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PageFetcher for ScriptedFetcher {
        async fn fetch(&self, url: &str, _kind: ContentKind) -> Result<PageContent, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            if url.ends_with("ok") {
                Ok(PageContent::Html(url.to_string()))
            } else {
                Err(FetchError::Status { status_code: 500 })
            }
        }
    }

    /// Paused-clock sleeps resolve on millisecond ticks
    fn assert_elapsed(start: Instant, expected: Duration) {
        let elapsed = start.elapsed();
        assert!(elapsed >= expected, "{:?} < {:?}", elapsed, expected);
        assert!(
            elapsed < expected + Duration::from_millis(50),
            "{:?} too long",
            elapsed
        );
    }

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_skips_failures_and_keeps_order() {
        let fetcher = ScriptedFetcher::default();
        let pages: Vec<_> = throttled_pages(
            &fetcher,
            urls(&["a/ok", "b/fail", "c/ok", "d/fail"]),
            Duration::from_secs(1),
            ContentKind::Html,
        )
        .collect()
        .await;

        assert_eq!(
            pages,
            vec![
                PageContent::Html("a/ok".to_string()),
                PageContent::Html("c/ok".to_string())
            ]
        );
        assert_eq!(
            *fetcher.requested.lock().unwrap(),
            urls(&["a/ok", "b/fail", "c/ok", "d/fail"])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_delay_per_url_regardless_of_failures() {
        let fetcher = ScriptedFetcher::default();
        let start = Instant::now();

        let pages: Vec<_> = throttled_pages(
            &fetcher,
            urls(&["a/fail", "b/fail", "c/ok", "d/fail", "e/fail"]),
            Duration::from_secs(2),
            ContentKind::Html,
        )
        .collect()
        .await;

        assert_eq!(pages.len(), 1);
        assert_elapsed(start, Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_all_failures_yield_nothing() {
        let fetcher = ScriptedFetcher::default();
        let start = Instant::now();

        let pages: Vec<_> = throttled_pages(
            &fetcher,
            urls(&["a", "b", "c"]),
            Duration::from_millis(500),
            ContentKind::Json,
        )
        .collect()
        .await;

        assert!(pages.is_empty());
        assert_elapsed(start, Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input() {
        let fetcher = ScriptedFetcher::default();
        let start = Instant::now();

        let pages: Vec<_> =
            throttled_pages(&fetcher, vec![], Duration::from_secs(1), ContentKind::Html)
                .collect()
                .await;

        assert!(pages.is_empty());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lazy_until_polled() {
        let fetcher = ScriptedFetcher::default();
        let pages = throttled_pages(
            &fetcher,
            urls(&["a/ok", "b/ok"]),
            Duration::from_secs(1),
            ContentKind::Html,
        );
        futures::pin_mut!(pages);
        assert!(fetcher.requested.lock().unwrap().is_empty());

        let first = pages.next().await;
        assert_eq!(first, Some(PageContent::Html("a/ok".to_string())));
        assert_eq!(fetcher.requested.lock().unwrap().len(), 1);
    }
}
