//! Contact extraction from page text
//!
//! Regex-based extraction of email addresses and social profile links. The
//! patterns are compiled once per process and shared read-only.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._-]+@([a-zA-Z0-9_-]+\.)+[a-zA-Z0-9_-]{2,}").expect("valid email regex")
});

static FACEBOOK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(https://)?(www\.)?facebook\.com/[a-zA-Z0-9._-]+").expect("valid facebook regex")
});

static TWITTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(https://)?(www\.)?twitter\.com/[a-zA-Z0-9._-]+").expect("valid twitter regex")
});

/// Image suffixes that look like a top-level domain in `name@2x.png`
const IMAGE_SUFFIXES: &[&str] = &[".png", ".jpg"];

/// Social networks whose profile links are collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Facebook,
    Twitter,
}

impl SocialPlatform {
    fn pattern(&self) -> &'static Regex {
        match self {
            Self::Facebook => &FACEBOOK_RE,
            Self::Twitter => &TWITTER_RE,
        }
    }
}

/// Normalizes a value so duplicates differing only in case collapse
fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Rejects matches whose "domain" is really an image file name
///
/// Only catches the common retina-asset case (`icon@2x.png`); anything that
/// merely looks like a domain still passes.
fn is_valid_email_domain(email: &str) -> bool {
    !IMAGE_SUFFIXES.iter().any(|suffix| email.ends_with(suffix))
}

/// Extracts lower-cased, deduplicated email addresses from text
///
/// # Example
///
/// ```
/// use storefront_harvester::crawler::extract_emails;
///
/// let emails = extract_emails("Write to Jozo.Hossa@Sufio.com (not icon@2x.png)");
/// assert_eq!(emails.into_iter().collect::<Vec<_>>(), vec!["jozo.hossa@sufio.com"]);
/// ```
pub fn extract_emails(text: &str) -> BTreeSet<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|email| is_valid_email_domain(email))
        .map(normalize)
        .collect()
}

/// Extracts lower-cased, deduplicated profile links for `platform` from text
pub fn extract_social_links(text: &str, platform: SocialPlatform) -> BTreeSet<String> {
    platform
        .pattern()
        .find_iter(text)
        .map(|m| normalize(m.as_str()))
        .collect()
}
