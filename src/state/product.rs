/// Title and primary image of one storefront product
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub title: String,
    pub image_url: String,
}

impl Product {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
        }
    }

    /// A product is empty when neither field was found
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.image_url.is_empty()
    }
}
