//! Filtering, sorting and pagination of furnishing products.
//!
//! This crate provides:
//! - Filter trait and implementations (price range, category, proximity)
//! - FilterPipeline for composing filters
//! - A stable sort stage and a pagination stage with pager controls
//! - FilterSortSettings with a tagged-action reducer
//! - ShoppingView, the state object tying the stages together
//!
//! ## Architecture
//! Data flows one way:
//! 1. Filters drop products outside the price range, selected categories
//!    or proximity radius
//! 2. The sort stage orders the survivors by price, rating or distance
//! 3. The pagination stage slices out the current page for display
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{PageNav, SettingsAction, ShoppingView, SortKey, ViewConfig};
//!
//! let mut view = ShoppingView::new(catalog, ViewConfig::default())?;
//! view.dispatch(SettingsAction::SetProximity(25.0));
//! view.dispatch(SettingsAction::SetSort(SortKey::Rating));
//! view.navigate(PageNav::Next);
//!
//! for product in view.page().items {
//!     println!("{} {:.2}", product.name, product.price);
//! }
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod pagination;
pub mod settings;
pub mod sort;
pub mod traits;
pub mod view;

// Re-export main types
pub use filter_pipeline::{FilterPipeline, filter};
pub use pagination::{Page, PageButton, PageControls, clamp_page, page_controls, paginate};
pub use settings::{FilterSortSettings, PriceRange, Proximity, SettingsAction, SortKey};
pub use sort::sort;
pub use traits::Filter;
pub use view::{DEFAULT_REFERENCE_POINT, PageNav, ShoppingView, ViewConfig};
