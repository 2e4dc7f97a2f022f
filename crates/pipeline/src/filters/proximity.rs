//! Filter on distance between a store and the reference point.

use crate::traits::Filter;
use catalog::{LatLon, Product, haversine_km};

/// Keeps products sold within `radius_km` of the reference point.
///
/// ## Algorithm
/// 1. Compute the haversine distance from the product's store coordinates
///    to the reference point
/// 2. Keep the product if the distance is at most `radius_km`
pub struct ProximityFilter {
    reference: LatLon,
    radius_km: f64,
}

impl ProximityFilter {
    /// Create a new ProximityFilter.
    ///
    /// # Arguments
    /// * `reference` - The point distances are measured from
    /// * `radius_km` - Maximum great-circle distance in kilometres
    pub fn new(reference: LatLon, radius_km: f64) -> Self {
        Self {
            reference,
            radius_km,
        }
    }
}

impl Filter for ProximityFilter {
    fn name(&self) -> &str {
        "ProximityFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        haversine_km(product.coordinates, self.reference) <= self.radius_km
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::product;
    use catalog::Category;

    // One degree of latitude is about 111.19 km
    fn products() -> Vec<Product> {
        vec![
            product(1, Category::Kitchen, 10.0, LatLon::new(0.0, 0.0)),
            product(2, Category::Kitchen, 10.0, LatLon::new(0.5, 0.0)),
            product(3, Category::Kitchen, 10.0, LatLon::new(1.0, 0.0)),
            product(4, Category::Kitchen, 10.0, LatLon::new(2.0, 0.0)),
        ]
    }

    #[test]
    fn test_proximity_filter() {
        let products = products();
        let filter = ProximityFilter::new(LatLon::new(0.0, 0.0), 120.0);
        let filtered = filter.apply(products.iter().collect());

        let ids: Vec<_> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_larger_radius_never_keeps_fewer() {
        let products = products();
        let mut previous = 0;
        for radius in [1.0, 50.0, 100.0, 150.0, 250.0, 1000.0] {
            let filter = ProximityFilter::new(LatLon::new(0.0, 0.0), radius);
            let kept = filter.apply(products.iter().collect()).len();
            assert!(kept >= previous, "radius {} kept {} < {}", radius, kept, previous);
            previous = kept;
        }
        assert_eq!(previous, 4);
    }
}
