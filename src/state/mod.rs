//! State module for per-domain collection
//!
//! # Components
//!
//! - `CollectionStage`: where a domain's collection currently is
//! - `DomainResult`: emails, social links and products gathered for a domain
//! - `Product`: title and primary image of one product

mod collection_stage;
mod domain_result;
mod product;

// Re-export main types
pub use collection_stage::CollectionStage;
pub use domain_result::DomainResult;
pub use product::Product;
