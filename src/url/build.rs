use url::Url;

/// Builds an absolute URL from a domain, a path and a scheme
///
/// Domain and path are used verbatim: nothing is lower-cased, punycoded or
/// percent-encoded. The domain is not validated either; a malformed one makes
/// a malformed URL, and fetching it will simply fail later. Configured paths
/// never carry a query or fragment (see [`crate::config::validate`]).
///
/// # Examples
///
/// ```
/// use storefront_harvester::url::get_url;
///
/// assert_eq!(get_url("sufio.com", "/contact", "https"), "https://sufio.com/contact");
/// ```
pub fn get_url(domain: &str, path: &str, scheme: &str) -> String {
    format!("{}://{}{}", scheme, domain, path)
}

/// Builds one URL per path, preserving path order. See [`get_url`].
pub fn get_urls(domain: &str, paths: &[String], scheme: &str) -> Vec<String> {
    paths
        .iter()
        .map(|path| get_url(domain, path, scheme))
        .collect()
}

/// Converts a possibly relative link to an absolute URL
///
/// Links that already carry a scheme are returned unchanged. Anything else
/// (`/products/x`, `products/x`, `//cdn.example.com/x`) is resolved against
/// `default_scheme://default_domain/`. When resolution fails the URL is
/// assembled verbatim; like [`get_url`], a malformed result only means the
/// later fetch of that one URL fails.
///
/// # Examples
///
/// ```
/// use storefront_harvester::url::convert_to_absolute_url;
///
/// let url = convert_to_absolute_url("/abcd", "sufio.com", "https");
/// assert_eq!(url, "https://sufio.com/abcd");
///
/// let url = convert_to_absolute_url("https://sufio.com/abcd", "other.net", "https");
/// assert_eq!(url, "https://sufio.com/abcd");
/// ```
pub fn convert_to_absolute_url(link: &str, default_domain: &str, default_scheme: &str) -> String {
    let link = link.trim();

    match Url::parse(link) {
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = format!("{}://{}/", default_scheme, default_domain);
            match Url::parse(&base).and_then(|base| base.join(link)) {
                Ok(absolute) => absolute.to_string(),
                Err(e) => {
                    let raw = verbatim_absolute_url(link, default_domain, default_scheme);
                    tracing::debug!("Using unresolved URL {} for {}: {}", raw, link, e);
                    raw
                }
            }
        }
        // has a scheme; malformed or not, it is not ours to fix
        _ => link.to_string(),
    }
}

fn verbatim_absolute_url(link: &str, domain: &str, scheme: &str) -> String {
    if link.starts_with("//") {
        format!("{}:{}", scheme, link)
    } else if link.starts_with('/') {
        format!("{}://{}{}", scheme, domain, link)
    } else {
        format!("{}://{}/{}", scheme, domain, link)
    }
}

/// Maps a product page URL to its JSON representation
///
/// A trailing slash is stripped before the `.json` suffix is appended.
///
/// ```
/// use storefront_harvester::url::url_to_json_url;
///
/// assert_eq!(url_to_json_url("https://sufio.com/abcd/"), "https://sufio.com/abcd.json");
/// ```
pub fn url_to_json_url(url: &str) -> String {
    format!("{}.json", url.trim_end_matches('/'))
}
