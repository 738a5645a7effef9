use crate::graph::NodeId;

/// OpenFlights ids are strictly positive.
pub fn valid_id(id: i64) -> Option<NodeId> {
    if id <= 0 {
        return None;
    }
    NodeId::try_from(id).ok()
}

/// IATA codes are three uppercase ASCII letters.
pub fn valid_iata(iata: &str) -> bool {
    iata.len() == 3 && iata.bytes().all(|c| c.is_ascii_uppercase())
}

pub fn valid_latitude(latitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude)
}

pub fn valid_longitude(longitude: f64) -> bool {
    (-180.0..=180.0).contains(&longitude)
}
