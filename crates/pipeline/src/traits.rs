//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to product sets.

use catalog::Product;

/// Core trait for filtering products.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared between threads
/// - Filters work on borrowed products and never mutate them
/// - A filter is a pure predicate, so filters commute and applying the
///   same filter twice changes nothing
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single product passes this filter
    fn matches(&self, product: &Product) -> bool;

    /// Apply this filter to a set of products, keeping input order.
    fn apply<'a>(&self, products: Vec<&'a Product>) -> Vec<&'a Product> {
        products
            .into_iter()
            .filter(|product| self.matches(product))
            .collect()
    }
}
