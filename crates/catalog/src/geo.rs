//! Distance functions between coordinates.
//!
//! Two metrics are used by the comparison view:
//! - [`haversine_km`] for the store-proximity filter (real kilometres)
//! - [`planar_distance`] for ordering by distance (degree-space Euclidean)

use crate::types::LatLon;

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points.
pub fn haversine_km(a: LatLon, b: LatLon) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_KM * c
}

/// Straight-line distance in degree space.
///
/// Not a geodesic distance. Only monotonic enough to rank nearby stores.
pub fn planar_distance(a: LatLon, b: LatLon) -> f64 {
    let d_lat = a.lat - b.lat;
    let d_lon = a.lon - b.lon;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_distance() {
        let p = LatLon::new(40.7128, -74.0060);
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_known_distance() {
        // New York to Los Angeles is roughly 3936 km
        let nyc = LatLon::new(40.7128, -74.0060);
        let la = LatLon::new(34.0522, -118.2437);
        let d = haversine_km(nyc, la);
        assert!((d - 3936.0).abs() < 10.0, "got {}", d);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let a = LatLon::new(0.0, 0.0);
        let b = LatLon::new(1.0, 0.0);
        let expected = EARTH_RADIUS_KM * 1f64.to_radians();
        assert!((haversine_km(a, b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a = LatLon::new(51.5074, -0.1278);
        let b = LatLon::new(48.8566, 2.3522);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_antipodal_does_not_nan() {
        let a = LatLon::new(0.0, 0.0);
        let b = LatLon::new(0.0, 180.0);
        let d = haversine_km(a, b);
        assert!(d.is_finite());
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_planar_distance() {
        let a = LatLon::new(0.0, 0.0);
        let b = LatLon::new(3.0, 4.0);
        assert_eq!(planar_distance(a, b), 5.0);
    }
}
