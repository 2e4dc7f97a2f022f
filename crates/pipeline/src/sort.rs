//! Sort stage.
//!
//! Orders filtered products by a [`SortKey`]. The sort is stable: products
//! with equal keys keep their relative input order.

use crate::settings::SortKey;
use catalog::{LatLon, Product, planar_distance};
use rayon::prelude::*;

/// Return `products` ordered by `sort_by`. The input slice is not modified.
///
/// - `Price`: ascending price
/// - `Rating`: descending rating
/// - `Distance`: ascending planar distance to `reference`
/// - `Input`: unchanged order
pub fn sort<'a>(products: &[&'a Product], sort_by: SortKey, reference: LatLon) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();

    match sort_by {
        SortKey::Price => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Distance => {
            // Compute each distance once instead of twice per comparison
            let mut keyed: Vec<(f64, &'a Product)> = sorted
                .par_iter()
                .map(|&product| (planar_distance(product.coordinates, reference), product))
                .collect();
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
            sorted = keyed.into_iter().map(|(_, product)| product).collect();
        }
        SortKey::Input => {}
    }

    tracing::debug!("Sorted {} products by {}", sorted.len(), sort_by);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Category, Store};

    fn product(id: u32, price: f64, rating: f32, coordinates: LatLon) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category: Category::LivingRoom,
            price,
            rating,
            coordinates,
            store: Store::default(),
        }
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    fn origin() -> LatLon {
        LatLon::new(0.0, 0.0)
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let products = vec![
            product(1, 300.0, 4.0, origin()),
            product(2, 100.0, 4.0, origin()),
            product(3, 200.0, 4.0, origin()),
        ];
        let refs: Vec<&Product> = products.iter().collect();
        assert_eq!(ids(&sort(&refs, SortKey::Price, origin())), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let products = vec![
            product(1, 10.0, 3.5, origin()),
            product(2, 10.0, 4.8, origin()),
            product(3, 10.0, 4.1, origin()),
        ];
        let refs: Vec<&Product> = products.iter().collect();
        assert_eq!(ids(&sort(&refs, SortKey::Rating, origin())), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_distance_ascending() {
        let products = vec![
            product(1, 10.0, 4.0, LatLon::new(3.0, 4.0)),
            product(2, 10.0, 4.0, LatLon::new(0.5, 0.5)),
            product(3, 10.0, 4.0, LatLon::new(-1.0, 1.0)),
        ];
        let refs: Vec<&Product> = products.iter().collect();
        assert_eq!(ids(&sort(&refs, SortKey::Distance, origin())), vec![2, 3, 1]);
    }

    #[test]
    fn test_equal_prices_keep_input_order() {
        let products = vec![
            product(7, 99.99, 4.0, origin()),
            product(3, 50.0, 4.0, origin()),
            product(5, 99.99, 4.0, origin()),
            product(1, 99.99, 4.0, origin()),
        ];
        let refs: Vec<&Product> = products.iter().collect();
        assert_eq!(ids(&sort(&refs, SortKey::Price, origin())), vec![3, 7, 5, 1]);
    }

    #[test]
    fn test_equal_ratings_and_distances_keep_input_order() {
        let products = vec![
            product(4, 10.0, 4.0, LatLon::new(1.0, 0.0)),
            product(2, 20.0, 4.0, LatLon::new(0.0, 1.0)),
            product(9, 30.0, 5.0, LatLon::new(-1.0, 0.0)),
        ];
        let refs: Vec<&Product> = products.iter().collect();
        assert_eq!(ids(&sort(&refs, SortKey::Rating, origin())), vec![9, 4, 2]);
        assert_eq!(ids(&sort(&refs, SortKey::Distance, origin())), vec![4, 2, 9]);
    }

    #[test]
    fn test_input_key_keeps_order() {
        let products = vec![
            product(2, 30.0, 1.0, origin()),
            product(1, 10.0, 5.0, origin()),
        ];
        let refs: Vec<&Product> = products.iter().collect();
        assert_eq!(ids(&sort(&refs, SortKey::Input, origin())), vec![2, 1]);
        // Input slice itself is left alone by every key
        sort(&refs, SortKey::Price, origin());
        assert_eq!(ids(&refs), vec![2, 1]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sort(&[], SortKey::Distance, origin()).is_empty());
    }
}
