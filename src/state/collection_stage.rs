/// Stage definitions for collecting one domain
///
/// Collection walks `Start -> FetchingContactPages -> FetchingProductList ->
/// FetchingProductPages -> Done`. When the product list cannot be fetched the
/// collection ends in `Failed` instead; the result is still returned, with no
/// products.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionStage {
    /// Nothing fetched yet
    Start,

    /// Streaming the configured contact pages
    FetchingContactPages,

    /// Fetching the product listing page
    FetchingProductList,

    /// Streaming the per-product JSON pages
    FetchingProductPages,

    // ===== Terminal States =====
    /// All steps completed
    Done,

    /// The product listing was unavailable; products are empty
    Failed,
}

impl CollectionStage {
    /// Returns true if no further transition is allowed
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Returns true if moving from `self` to `next` follows the collection order
    pub fn can_transition_to(&self, next: CollectionStage) -> bool {
        matches!(
            (self, next),
            (Self::Start, Self::FetchingContactPages)
                | (Self::FetchingContactPages, Self::FetchingProductList)
                | (Self::FetchingProductList, Self::FetchingProductPages)
                | (Self::FetchingProductList, Self::Failed)
                | (Self::FetchingProductPages, Self::Done)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::FetchingContactPages => "fetching_contact_pages",
            Self::FetchingProductList => "fetching_product_list",
            Self::FetchingProductPages => "fetching_product_pages",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for CollectionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_terminal() {
        assert!(!CollectionStage::Start.is_terminal());
        assert!(!CollectionStage::FetchingContactPages.is_terminal());
        assert!(!CollectionStage::FetchingProductList.is_terminal());
        assert!(!CollectionStage::FetchingProductPages.is_terminal());

        assert!(CollectionStage::Done.is_terminal());
        assert!(CollectionStage::Failed.is_terminal());
    }

    #[test]
    fn test_happy_path_transitions() {
        use CollectionStage::*;
        let path = [
            Start,
            FetchingContactPages,
            FetchingProductList,
            FetchingProductPages,
            Done,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{:?}", pair);
        }
    }

    #[test]
    fn test_failed_only_from_product_list() {
        use CollectionStage::*;
        assert!(FetchingProductList.can_transition_to(Failed));

        assert!(!Start.can_transition_to(Failed));
        assert!(!FetchingContactPages.can_transition_to(Failed));
        assert!(!FetchingProductPages.can_transition_to(Failed));
    }

    #[test]
    fn test_no_skips_or_reversals() {
        use CollectionStage::*;
        assert!(!Start.can_transition_to(FetchingProductList));
        assert!(!FetchingContactPages.can_transition_to(Done));
        assert!(!FetchingProductPages.can_transition_to(FetchingContactPages));
        assert!(!Done.can_transition_to(Start));
        assert!(!Failed.can_transition_to(Done));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CollectionStage::Start), "start");
        assert_eq!(
            format!("{}", CollectionStage::FetchingProductList),
            "fetching_product_list"
        );
        assert_eq!(format!("{}", CollectionStage::Failed), "failed");
    }
}
