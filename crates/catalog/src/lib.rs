//! # Catalog Crate
//!
//! Product data for the furnishing comparison view.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Product, Category, LatLon, Store, Catalog)
//! - **geo**: Haversine and planar distance between coordinates
//! - **parser**: Parse JSON catalog files into Rust structs
//! - **index**: Build and validate the in-memory Catalog
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Category};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/products.json"))?;
//! let kitchen = catalog.get_products_by_category(Category::Kitchen);
//! println!("{} kitchen products", kitchen.len());
//! ```

pub mod error;
pub mod geo;
pub mod index;
pub mod parser;
pub mod types;

pub use error::{CatalogError, Result};
pub use geo::{EARTH_RADIUS_KM, haversine_km, planar_distance};
pub use types::{Catalog, Category, LatLon, Product, ProductId, Store};
