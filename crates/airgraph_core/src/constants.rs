pub(crate) const EARTH_RADIUS_KM: f64 = 6_378.1;

pub(crate) const UNREACHABLE: f64 = f64::INFINITY;
