//! Filter on the selected room categories.

use crate::traits::Filter;
use catalog::{Category, Product};
use std::collections::BTreeSet;

/// Keeps products in one of the selected categories.
///
/// An empty selection means no restriction.
pub struct CategoryFilter {
    categories: BTreeSet<Category>,
}

impl CategoryFilter {
    pub fn new(categories: BTreeSet<Category>) -> Self {
        Self { categories }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }
}
