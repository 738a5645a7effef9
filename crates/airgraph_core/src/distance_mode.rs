use serde::{Deserialize, Serialize};

use crate::geopoint::GeoPoint;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DistanceMode {
    /// Great-circle distance in kilometers
    #[default]
    Spherical,
    /// Euclidean distance on the latitude/longitude plane
    Planar,
}

impl DistanceMode {
    #[inline(always)]
    pub fn distance(&self, from: &GeoPoint, to: &GeoPoint) -> f64 {
        match self {
            DistanceMode::Spherical => from.haversine_distance(to),
            DistanceMode::Planar => from.planar_distance(to),
        }
    }
}
