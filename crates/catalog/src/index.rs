//! Catalog building and validation.
//!
//! - Insert products while maintaining the id and category indices
//! - Validate every product invariant in parallel with Rayon
//! - Aggregate summaries for display

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

impl Catalog {
    /// Load a catalog file, build the indices and validate every product.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading catalog from {}", path.display());
        let products = parser::parse_products(path)?;
        let catalog = Self::from_products(products)?;
        tracing::info!("Loaded {} products", catalog.len());
        Ok(catalog)
    }

    /// Build a validated catalog from already-shaped products.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for product in products {
            catalog.insert_product(product)?;
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Insert a product and update indices.
    ///
    /// Fails with `DuplicateId` if the id is already present; the catalog is
    /// left unchanged in that case.
    pub fn insert_product(&mut self, product: Product) -> Result<()> {
        if self.by_id.contains_key(&product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
        self.by_id.insert(product.id, self.products.len());
        self.category_index
            .entry(product.category)
            .or_default()
            .push(product.id);
        self.products.push(product);
        Ok(())
    }

    /// Check price, rating and coordinate invariants of every product.
    ///
    /// Returns the violation of the earliest offending product.
    pub fn validate(&self) -> Result<()> {
        let first_error = self
            .products
            .par_iter()
            .enumerate()
            .filter_map(|(pos, product)| validate_product(product).err().map(|e| (pos, e)))
            .min_by_key(|(pos, _)| *pos);

        match first_error {
            Some((_, err)) => Err(err),
            None => Ok(()),
        }
    }

    /// Number of products in each category, including empty categories
    pub fn counts_by_category(&self) -> BTreeMap<Category, usize> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get_products_by_category(category).len()))
            .collect()
    }

    /// Lowest and highest price, or `None` for an empty catalog
    pub fn price_span(&self) -> Option<(f64, f64)> {
        self.products.iter().fold(None, |span, p| match span {
            None => Some((p.price, p.price)),
            Some((lo, hi)) => Some((lo.min(p.price), hi.max(p.price))),
        })
    }
}

fn validate_product(product: &Product) -> Result<()> {
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(CatalogError::InvalidValue {
            id: product.id,
            field: "price".to_string(),
            value: product.price.to_string(),
        });
    }
    if !(0.0..=5.0).contains(&product.rating) {
        return Err(CatalogError::InvalidValue {
            id: product.id,
            field: "rating".to_string(),
            value: product.rating.to_string(),
        });
    }
    if !product.coordinates.is_valid() {
        return Err(CatalogError::InvalidValue {
            id: product.id,
            field: "coordinates".to_string(),
            value: product.coordinates.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, category: Category, price: f64, rating: f32) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category,
            price,
            rating,
            coordinates: LatLon::new(40.0, -74.0),
            store: Store::default(),
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut catalog = Catalog::new();
        catalog.insert_product(product(1, Category::Kitchen, 10.0, 4.0)).unwrap();
        catalog.insert_product(product(2, Category::Bedroom, 20.0, 3.0)).unwrap();
        catalog.insert_product(product(3, Category::Kitchen, 30.0, 5.0)).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get_product(2).unwrap().price, 20.0);
        assert_eq!(catalog.get_products_by_category(Category::Kitchen), &[1, 3]);
        assert!(catalog.get_products_by_category(Category::Bathroom).is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert_product(product(1, Category::Kitchen, 10.0, 4.0)).unwrap();
        let err = catalog
            .insert_product(product(1, Category::Bedroom, 5.0, 2.0))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get_product(1).unwrap().category, Category::Kitchen);
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let err = Catalog::from_products(vec![
            product(1, Category::Kitchen, 10.0, 4.0),
            product(2, Category::Kitchen, -1.0, 4.0),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { id: 2, ref field, .. } if field == "price"));
    }

    #[test]
    fn test_validate_rejects_rating_out_of_range() {
        let err = Catalog::from_products(vec![product(4, Category::Bedroom, 10.0, 5.5)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { id: 4, ref field, .. } if field == "rating"));
    }

    #[test]
    fn test_validate_rejects_bad_coordinates() {
        let mut bad = product(9, Category::Bathroom, 10.0, 1.0);
        bad.coordinates = LatLon::new(91.0, 0.0);
        let err = Catalog::from_products(vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { id: 9, .. }));
    }

    #[test]
    fn test_validate_reports_earliest_violation() {
        let err = Catalog::from_products(vec![
            product(1, Category::Kitchen, 10.0, 4.0),
            product(2, Category::Kitchen, -3.0, 4.0),
            product(3, Category::Kitchen, -5.0, 4.0),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { id: 2, .. }));
    }

    #[test]
    fn test_counts_and_price_span() {
        let catalog = Catalog::from_products(vec![
            product(1, Category::Kitchen, 10.0, 4.0),
            product(2, Category::Kitchen, 250.0, 4.0),
            product(3, Category::LivingRoom, 99.0, 4.0),
        ])
        .unwrap();

        let counts = catalog.counts_by_category();
        assert_eq!(counts.len(), Category::ALL.len());
        assert_eq!(counts[&Category::Kitchen], 2);
        assert_eq!(counts[&Category::LivingRoom], 1);
        assert_eq!(counts[&Category::Bathroom], 0);
        assert_eq!(catalog.price_span(), Some((10.0, 250.0)));
        assert_eq!(Catalog::new().price_span(), None);
    }
}
