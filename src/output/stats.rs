//! Run statistics
//!
//! Counts gathered from a finished run, printed at the end of the CLI.

use crate::state::DomainResult;

/// Overall numbers for one harvesting run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestStatistics {
    pub domains_read: usize,
    pub domains_collected: usize,
    pub domains_failed: usize,
    pub domains_with_email: usize,
    pub domains_with_products: usize,
    pub total_emails: usize,
    pub total_products: usize,
}

impl HarvestStatistics {
    /// Builds statistics from the number of input domains and the collected results
    pub fn from_results(domains_read: usize, results: &[DomainResult]) -> Self {
        Self {
            domains_read,
            domains_collected: results.len(),
            domains_failed: domains_read.saturating_sub(results.len()),
            domains_with_email: results.iter().filter(|r| !r.emails.is_empty()).count(),
            domains_with_products: results.iter().filter(|r| !r.products.is_empty()).count(),
            total_emails: results.iter().map(|r| r.emails.len()).sum(),
            total_products: results.iter().map(|r| r.products.len()).sum(),
        }
    }

    /// Returns the share of input domains collected, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.domains_read == 0 {
            return 0.0;
        }
        (self.domains_collected as f64 / self.domains_read as f64) * 100.0
    }
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &HarvestStatistics) {
    println!("=== Harvest Statistics ===\n");
    println!("Domains:");
    println!("  Read: {}", stats.domains_read);
    println!(
        "  Collected: {} ({:.1}%)",
        stats.domains_collected,
        stats.success_rate()
    );
    println!("  Failed: {}", stats.domains_failed);
    println!("\nFindings:");
    println!(
        "  Emails: {} across {} domains",
        stats.total_emails, stats.domains_with_email
    );
    println!(
        "  Products: {} across {} domains",
        stats.total_products, stats.domains_with_products
    );
}
