//! Filter on the price slider bounds.

use crate::settings::PriceRange;
use crate::traits::Filter;
use catalog::Product;

/// Keeps products whose price lies inside an inclusive range.
///
/// An inverted range (`min > max`) keeps nothing.
pub struct PriceRangeFilter {
    range: PriceRange,
}

impl PriceRangeFilter {
    pub fn new(range: PriceRange) -> Self {
        Self { range }
    }
}

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        self.range.contains(product.price)
    }
}
