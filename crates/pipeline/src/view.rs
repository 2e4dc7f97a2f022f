//! The comparison view: explicit state for filter → sort → paginate.
//!
//! A [`ShoppingView`] owns the products, the settings and the page cursor.
//! Settings only change through [`ShoppingView::dispatch`], which recomputes
//! the result order and sends the cursor back to page 1. Page navigation only
//! moves the cursor. After every call the cursor lies in
//! `[1, total_pages]`.

use crate::filter_pipeline::filter;
use crate::pagination::{
    DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE_WINDOW, Page, PageControls, clamp_page, page_controls,
    paginate, total_pages,
};
use crate::settings::{FilterSortSettings, SettingsAction};
use crate::sort::sort;
use anyhow::{Result, ensure};
use catalog::{Catalog, LatLon, Product, ProductId, haversine_km};
use serde::{Deserialize, Serialize};

/// Default reference point (Manhattan, New York)
pub const DEFAULT_REFERENCE_POINT: LatLon = LatLon::new(40.7128, -74.0060);

/// Static configuration of a view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub items_per_page: usize,
    /// Number of numbered page buttons shown around the current page
    pub page_window: usize,
    /// Point that proximity and distance are measured from
    pub reference_point: LatLon,
}

impl ViewConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.items_per_page > 0, "items_per_page must be at least 1");
        ensure!(self.page_window > 0, "page_window must be at least 1");
        ensure!(
            self.reference_point.is_valid(),
            "invalid reference point {}",
            self.reference_point
        );
        Ok(())
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            page_window: DEFAULT_PAGE_WINDOW,
            reference_point: DEFAULT_REFERENCE_POINT,
        }
    }
}

/// Page navigation requested by the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
    /// Jump to a page number; out-of-range targets are clamped
    To(i64),
}

/// Product list state behind the table, card and map displays.
#[derive(Debug)]
pub struct ShoppingView {
    catalog: Catalog,
    settings: FilterSortSettings,
    config: ViewConfig,
    current_page: usize,
    /// Filtered and sorted product ids
    results: Vec<ProductId>,
}

impl ShoppingView {
    /// Create a view with default settings.
    pub fn new(catalog: Catalog, config: ViewConfig) -> Result<Self> {
        Self::with_settings(catalog, FilterSortSettings::default(), config)
    }

    /// Create a view starting from the given settings.
    pub fn with_settings(
        catalog: Catalog,
        settings: FilterSortSettings,
        config: ViewConfig,
    ) -> Result<Self> {
        config.validate()?;
        let mut view = Self {
            catalog,
            settings,
            config,
            current_page: 1,
            results: Vec::new(),
        };
        view.recompute();
        Ok(view)
    }

    pub fn settings(&self) -> &FilterSortSettings {
        &self.settings
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.results.len(), self.config.items_per_page)
    }

    /// Number of products passing the filters
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Apply a settings change.
    ///
    /// When the settings actually change the results are recomputed and the
    /// cursor goes back to page 1. Returns whether anything changed.
    pub fn dispatch(&mut self, action: SettingsAction) -> bool {
        if !self.settings.apply(action) {
            return false;
        }
        tracing::debug!("Settings changed by {:?}", action);
        self.recompute();
        self.current_page = 1;
        true
    }

    /// Move the page cursor. Results are not recomputed.
    pub fn navigate(&mut self, nav: PageNav) {
        let total = self.total_pages();
        let target = match nav {
            PageNav::First => 1,
            PageNav::Prev => self.current_page as i64 - 1,
            PageNav::Next => self.current_page as i64 + 1,
            PageNav::Last => total as i64,
            PageNav::To(page) => page,
        };
        self.current_page = clamp_page(target, total);
    }

    /// Swap in new products (e.g. a fresh recommendation result).
    ///
    /// The settings are kept; the cursor stays where it was if that page
    /// still exists, otherwise it is clamped to the last page.
    pub fn replace_products(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.recompute();
    }

    /// All filtered and sorted products
    pub fn results(&self) -> Vec<&Product> {
        self.results
            .iter()
            .filter_map(|&id| self.catalog.get_product(id))
            .collect()
    }

    /// The products on the current page
    pub fn page(&self) -> Page<&Product> {
        paginate(
            &self.results(),
            self.current_page as i64,
            self.config.items_per_page,
        )
    }

    pub fn controls(&self) -> PageControls {
        page_controls(self.current_page, self.total_pages(), self.config.page_window)
    }

    /// Great-circle distance from the reference point, for display
    pub fn distance_km(&self, product: &Product) -> f64 {
        haversine_km(product.coordinates, self.config.reference_point)
    }

    /// Full filter → sort pass, then re-clamp the cursor to the new size.
    fn recompute(&mut self) {
        let reference = self.config.reference_point;
        let filtered = filter(self.catalog.products(), &self.settings, reference);
        let sorted = sort(&filtered, self.settings.sort_by, reference);
        self.results = sorted.into_iter().map(|p| p.id).collect();
        self.current_page = clamp_page(self.current_page as i64, self.total_pages());

        tracing::debug!(
            "Recomputed results: {} of {} products, {} pages",
            self.results.len(),
            self.catalog.len(),
            self.total_pages()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SortKey;
    use catalog::{Category, Store};

    fn product(id: ProductId, category: Category, price: f64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category,
            price,
            rating: 4.0,
            coordinates: DEFAULT_REFERENCE_POINT,
            store: Store::default(),
        }
    }

    /// 35 kitchen products priced 1..=35 plus 5 bedroom products
    fn view() -> ShoppingView {
        let mut products: Vec<Product> = (1..=35)
            .map(|id| product(id, Category::Kitchen, id as f64))
            .collect();
        products.extend((36..=40).map(|id| product(id, Category::Bedroom, id as f64)));
        ShoppingView::new(Catalog::from_products(products).unwrap(), ViewConfig::default()).unwrap()
    }

    #[test]
    fn test_config_validation() {
        assert!(ViewConfig::default().validate().is_ok());
        let zero_page = ViewConfig {
            items_per_page: 0,
            ..Default::default()
        };
        assert!(zero_page.validate().is_err());
        let bad_reference = ViewConfig {
            reference_point: LatLon::new(100.0, 0.0),
            ..Default::default()
        };
        assert!(ShoppingView::new(Catalog::new(), bad_reference).is_err());
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut view = view();
        assert_eq!(view.total_pages(), 4);
        assert_eq!(view.current_page(), 1);

        view.navigate(PageNav::Prev);
        assert_eq!(view.current_page(), 1);
        view.navigate(PageNav::Next);
        assert_eq!(view.current_page(), 2);
        view.navigate(PageNav::Last);
        assert_eq!(view.current_page(), 4);
        view.navigate(PageNav::Next);
        assert_eq!(view.current_page(), 4);
        view.navigate(PageNav::To(-3));
        assert_eq!(view.current_page(), 1);
        view.navigate(PageNav::To(99));
        assert_eq!(view.current_page(), 4);
        view.navigate(PageNav::First);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_settings_change_resets_page() {
        let mut view = view();
        view.navigate(PageNav::To(3));

        assert!(view.dispatch(SettingsAction::SetSort(SortKey::Rating)));
        assert_eq!(view.current_page(), 1);

        view.navigate(PageNav::To(2));
        assert!(!view.dispatch(SettingsAction::SetSort(SortKey::Rating)));
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn test_filter_change_shrinks_results() {
        let mut view = view();
        view.navigate(PageNav::Last);

        view.dispatch(SettingsAction::ToggleCategory(Category::Bedroom));
        assert_eq!(view.result_count(), 5);
        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.current_page(), 1);
        let ids: Vec<_> = view.page().items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![36, 37, 38, 39, 40]);
    }

    #[test]
    fn test_replace_products_clamps_page() {
        let mut view = view();
        view.navigate(PageNav::Last);
        assert_eq!(view.current_page(), 4);

        let smaller = (1..=12).map(|id| product(id, Category::Kitchen, id as f64)).collect();
        view.replace_products(Catalog::from_products(smaller).unwrap());
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.current_page(), 2);
        assert_eq!(view.page().items.len(), 2);
    }

    #[test]
    fn test_empty_results_keep_one_page() {
        let mut view = view();
        view.dispatch(SettingsAction::SetPriceRange { min: 100.0, max: 50.0 });
        assert_eq!(view.result_count(), 0);
        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.current_page(), 1);
        assert!(view.page().is_empty());
        assert_eq!(view.controls().buttons.len(), 1);
    }

    #[test]
    fn test_wide_window_controls() {
        let config = ViewConfig {
            page_window: usize::MAX,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let empty = ShoppingView::new(Catalog::new(), config).unwrap();
        assert_eq!(empty.controls().buttons.len(), 1);

        let products = view().catalog().products().to_vec();
        let full = ShoppingView::new(Catalog::from_products(products).unwrap(), config).unwrap();
        assert_eq!(full.controls().buttons.len(), 4);
    }

    #[test]
    fn test_distance_km() {
        let view = view();
        let product = view.results()[0];
        assert!(view.distance_km(product) < 1e-9);
    }
}
