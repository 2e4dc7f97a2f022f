//! Parser for catalog files.
//!
//! A catalog file is a JSON array of products:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "Oak coffee table",
//!     "category": "Living Room",
//!     "price": 249.0,
//!     "rating": 4.5,
//!     "coordinates": { "lat": 40.71, "lon": -74.0 },
//!     "store": { "name": "Home Depot", "address": "Broadway 1" }
//!   }
//! ]
//! ```
//!
//! Parsing only checks the shape. Range checks happen in
//! [`Catalog::validate`](crate::types::Catalog::validate).

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a file into a string, mapping a missing file to `FileNotFound`
fn read_catalog_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })
}

/// Parse a catalog file from disk
pub fn parse_products(path: &Path) -> Result<Vec<Product>> {
    let text = read_catalog_file(path)?;
    parse_named(&text, &path.display().to_string())
}

/// Parse a catalog from a JSON string
pub fn parse_products_str(text: &str) -> Result<Vec<Product>> {
    parse_named(text, "<string>")
}

fn parse_named(text: &str, source_name: &str) -> Result<Vec<Product>> {
    serde_json::from_str(text).map_err(|e| CatalogError::ParseError {
        source_name: source_name.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a category label, as typed on a command line
pub fn parse_category(s: &str) -> Result<Category> {
    Category::from_label(s).ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
}

/// Serialize products back to pretty JSON (used for sample catalogs)
pub fn products_to_json(products: &[Product]) -> Result<String> {
    serde_json::to_string_pretty(products).map_err(|e| CatalogError::ParseError {
        source_name: "<output>".to_string(),
        reason: e.to_string(),
    })
}
