use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::constants::EARTH_RADIUS_KM;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[inline(always)]
fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    /// Great-circle distance in kilometers.
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        let lat1 = to_radians(self.lat);
        let lat2 = to_radians(other.lat);

        let dlat = lat2 - lat1;
        let dlng = to_radians(other.lng - self.lng);

        // Rounding can push `a` just above 1 for antipodal points
        let a = ((dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2))
            .clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        c * EARTH_RADIUS_KM
    }

    /// Euclidean distance in the latitude/longitude plane, in degrees.
    pub fn planar_distance(&self, other: &GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;

        (dlat.powi(2) + dlng.powi(2)).sqrt()
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<&GeoPoint> for [f64; 2] {
    fn from(point: &GeoPoint) -> Self {
        [point.lng, point.lat]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_enough(distance1: f64, distance2: f64) -> bool {
        distance1.max(distance2) / distance1.min(distance2) < 1.02
    }

    #[test]
    fn test_haversine_distance() {
        // Goroka and Madang, Papua New Guinea
        let goroka = GeoPoint::new(-6.081689834590001, 145.391998291);
        let madang = GeoPoint::new(-5.20707988739, 145.789001465);

        assert!(close_enough(goroka.haversine_distance(&madang), 106.80));
    }

    #[test]
    fn test_haversine_distance_is_symmetric() {
        let a = GeoPoint::new(40.6398, -73.7789);
        let b = GeoPoint::new(35.7647, 140.386);

        assert_eq!(a.haversine_distance(&b), b.haversine_distance(&a));
    }

    #[test]
    fn test_antipodal_distance_is_half_the_circumference() {
        let half = PI * EARTH_RADIUS_KM;

        for lat in [-20.7, -45.0, 0.0, 33.3, 89.9] {
            for lng in [0.0, 12.5, -100.25] {
                let a = GeoPoint::new(lat, lng);
                let b = GeoPoint::new(-lat, lng - 180.0);

                let distance = a.haversine_distance(&b);
                assert!(distance.is_finite(), "{a:?} -> {b:?} gave {distance}");
                assert!((distance - half).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_planar_distance() {
        let a = GeoPoint::new(30.0, -30.0);
        let b = GeoPoint::new(25.0, -35.0);

        assert!((a.planar_distance(&b) - 5.0 * 2f64.sqrt()).abs() <= 0.0001);
    }

    #[test]
    fn test_same_point_has_zero_distance() {
        let a = GeoPoint::new(12.5, 99.1);

        assert_eq!(a.haversine_distance(&a), 0.0);
        assert_eq!(a.planar_distance(&a), 0.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(GeoPoint::new(90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, 181.0).is_valid());
    }

    #[test]
    fn test_into_lng_lat() {
        let coordinates: [f64; 2] = (&GeoPoint::new(1.0, 2.0)).into();
        assert_eq!(coordinates, [2.0, 1.0]);
    }
}
