//! Filter implementations for the product pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod category;
pub mod price_range;
pub mod proximity;

// Re-export for convenience
pub use category::CategoryFilter;
pub use price_range::PriceRangeFilter;
pub use proximity::ProximityFilter;
