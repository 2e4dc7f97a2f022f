//! Error types for the catalog crate.
//!
//! Every failure while reading or validating a product catalog is reported
//! through [`CatalogError`], so callers can match on the exact problem.

use crate::types::ProductId;
use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog JSON could not be decoded
    #[error("Parse error in {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },

    /// A product field had a value outside its allowed range
    #[error("Invalid {field} for product {id}: {value}")]
    InvalidValue {
        id: ProductId,
        field: String,
        value: String,
    },

    /// A category label did not name any known category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Two products share the same id
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
