use crate::state::{CollectionStage, Product};
use crate::HarvestError;
use std::collections::BTreeSet;

/// Everything collected for one domain
///
/// Contact values are kept in sets of lower-cased strings, so the same address
/// found on several pages (or in different letter case) appears once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainResult {
    pub domain: String,
    pub emails: BTreeSet<String>,
    pub facebook_links: BTreeSet<String>,
    pub twitter_links: BTreeSet<String>,
    pub products: Vec<Product>,
    stage: CollectionStage,
}

impl DomainResult {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            emails: BTreeSet::new(),
            facebook_links: BTreeSet::new(),
            twitter_links: BTreeSet::new(),
            products: Vec::new(),
            stage: CollectionStage::Start,
        }
    }

    pub fn stage(&self) -> CollectionStage {
        self.stage
    }

    /// Moves the collection to `next`, rejecting out-of-order transitions
    pub fn advance(&mut self, next: CollectionStage) -> Result<(), HarvestError> {
        if !self.stage.can_transition_to(next) {
            return Err(HarvestError::InvalidTransition {
                from: self.stage,
                to: next,
            });
        }
        tracing::trace!("{}: {} -> {}", self.domain, self.stage, next);
        self.stage = next;
        Ok(())
    }

    /// Stores products in fetch order, dropping empty ones and keeping at most `limit`
    pub fn set_products(&mut self, products: impl IntoIterator<Item = Product>, limit: usize) {
        self.products = products
            .into_iter()
            .filter(|product| !product.is_empty())
            .take(limit)
            .collect();
    }
}
