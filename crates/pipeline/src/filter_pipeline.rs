//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, and the
//! [`filter`] entry point used by the comparison view.

use crate::filters::{CategoryFilter, PriceRangeFilter, ProximityFilter};
use crate::settings::FilterSortSettings;
use crate::traits::Filter;
use catalog::{LatLon, Product};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(PriceRangeFilter::new(PriceRange::new(0.0, 500.0)))
///     .add_filter(ProximityFilter::new(reference, 25.0));
///
/// let filtered = pipeline.apply(products.iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the standard pipeline for a settings record.
    ///
    /// Filters that cannot reject anything (no category selected,
    /// unrestricted proximity) are left out.
    pub fn from_settings(settings: &FilterSortSettings, reference: LatLon) -> Self {
        let mut pipeline = Self::new().add_filter(PriceRangeFilter::new(settings.price_range));

        if !settings.categories.is_empty() {
            pipeline = pipeline.add_filter(CategoryFilter::new(settings.categories.clone()));
        }

        if let Some(radius_km) = settings.store_proximity.radius_km() {
            pipeline = pipeline.add_filter(ProximityFilter::new(reference, radius_km));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the products.
    ///
    /// Each filter logs its input and output counts at debug level.
    pub fn apply<'a>(&self, products: Vec<&'a Product>) -> Vec<&'a Product> {
        let mut current = products;
        for filter in &self.filters {
            let input_count = current.len();
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter stage: keep products passing the price, category and proximity
/// criteria of `settings`. Input order is preserved; `products` is untouched.
pub fn filter<'a>(
    products: &'a [Product],
    settings: &FilterSortSettings,
    reference: LatLon,
) -> Vec<&'a Product> {
    FilterPipeline::from_settings(settings, reference).apply(products.iter().collect())
}
