use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    constants::UNREACHABLE, distance_mode::DistanceMode, error::GraphError, geopoint::GeoPoint,
};

pub type NodeId = u32;

/// An airport and the routes leaving it.
#[derive(Debug, Clone)]
pub struct Airport {
    name: String,
    location: GeoPoint,

    // Target airport id -> route distance
    connections: FxHashMap<NodeId, f64>,
}

impl Airport {
    fn new(name: String, location: GeoPoint) -> Self {
        Airport {
            name,
            location,
            connections: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    #[inline(always)]
    fn connected_to(&self, id: NodeId) -> bool {
        self.connections.contains_key(&id)
    }

    #[inline(always)]
    fn connection_distance(&self, id: NodeId) -> f64 {
        self.connections.get(&id).copied().unwrap_or(UNREACHABLE)
    }
}

/// Directed graph of airports. Route weights are computed once, when the
/// route is connected, using the graph's [`DistanceMode`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    mode: DistanceMode,
    connection_count: usize,
    nodes: FxHashMap<NodeId, Airport>,
}

fn sorted_if(mut ids: Vec<NodeId>, sorted: bool) -> Vec<NodeId> {
    if sorted {
        ids.sort_unstable();
    }
    ids
}

impl Graph {
    pub fn new(mode: DistanceMode) -> Self {
        Graph {
            mode,
            connection_count: 0,
            nodes: FxHashMap::default(),
        }
    }

    pub fn distance_mode(&self) -> DistanceMode {
        self.mode
    }

    /// Only routes connected after the change use the new mode.
    pub fn set_distance_mode(&mut self, mode: DistanceMode) {
        self.mode = mode;
    }

    /// Inserts an airport without any route. An existing airport with the same
    /// id is replaced, together with its outgoing routes.
    pub fn add_node(&mut self, id: NodeId, name: impl Into<String>, latitude: f64, longitude: f64) {
        let airport = Airport::new(name.into(), GeoPoint::new(latitude, longitude));

        if let Some(previous) = self.nodes.insert(id, airport) {
            self.connection_count -= previous.connections.len();
        }
    }

    /// Removes an airport, its outgoing routes and every route targeting it.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), GraphError> {
        let removed = self.nodes.remove(&id).ok_or(GraphError::NodeNotFound(id))?;
        self.connection_count -= removed.connections.len();

        let mut inbound = 0;
        for airport in self.nodes.values_mut() {
            if airport.connections.remove(&id).is_some() {
                inbound += 1;
            }
        }
        self.connection_count -= inbound;

        debug!(
            id,
            outbound = removed.connections.len(),
            inbound,
            "Removed airport"
        );

        Ok(())
    }

    /// Adds (or recomputes) the one-way route `from -> to`.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        let target = self.location(to)?;
        let mode = self.mode;

        let airport = self
            .nodes
            .get_mut(&from)
            .ok_or(GraphError::NodeNotFound(from))?;
        let distance = mode.distance(&airport.location, &target);

        if airport.connections.insert(to, distance).is_none() {
            self.connection_count += 1;
        }

        Ok(())
    }

    /// Removes the one-way route `from -> to`. Returns whether a route existed.
    pub fn disconnect(&mut self, from: NodeId, to: NodeId) -> Result<bool, GraphError> {
        self.airport(to)?;

        let airport = self
            .nodes
            .get_mut(&from)
            .ok_or(GraphError::NodeNotFound(from))?;

        let removed = airport.connections.remove(&to).is_some();
        if removed {
            self.connection_count -= 1;
        }

        Ok(removed)
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of one-way routes.
    pub fn connections(&self) -> usize {
        self.connection_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn ids(&self, sorted: bool) -> Vec<NodeId> {
        sorted_if(self.nodes.keys().copied().collect(), sorted)
    }

    pub fn airport(&self, id: NodeId) -> Result<&Airport, GraphError> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    pub fn name(&self, id: NodeId) -> Result<&str, GraphError> {
        self.airport(id).map(Airport::name)
    }

    pub fn location(&self, id: NodeId) -> Result<GeoPoint, GraphError> {
        self.airport(id).map(Airport::location)
    }

    pub fn latitude(&self, id: NodeId) -> Result<f64, GraphError> {
        self.location(id).map(|location| location.lat)
    }

    pub fn longitude(&self, id: NodeId) -> Result<f64, GraphError> {
        self.location(id).map(|location| location.lng)
    }

    pub fn connected_to(&self, from: NodeId, to: NodeId) -> Result<bool, GraphError> {
        self.airport(to)?;
        Ok(self.airport(from)?.connected_to(to))
    }

    /// Weight of the route `from -> to`, `0` when both ids are the same airport
    /// and infinity when there is no such route.
    pub fn distance(&self, from: NodeId, to: NodeId) -> Result<f64, GraphError> {
        let airport = self.airport(from)?;
        self.airport(to)?;

        if from == to {
            return Ok(0.0);
        }

        Ok(airport.connection_distance(to))
    }

    /// Ids of the airports reachable with a single route from `id`.
    pub fn connections_of(&self, id: NodeId, sorted: bool) -> Result<Vec<NodeId>, GraphError> {
        let airport = self.airport(id)?;
        Ok(sorted_if(
            airport.connections.keys().copied().collect(),
            sorted,
        ))
    }

    /// Outgoing routes of `id` with their weights, by ascending target id.
    pub fn edges(&self, id: NodeId) -> Result<Vec<(NodeId, f64)>, GraphError> {
        let airport = self.airport(id)?;

        let mut edges: Vec<(NodeId, f64)> = airport
            .connections
            .iter()
            .map(|(&target, &distance)| (target, distance))
            .collect();
        edges.sort_unstable_by_key(|&(target, _)| target);

        Ok(edges)
    }

    /// Whether at least one route links two distinct airports.
    pub fn has_route_between_distinct_nodes(&self) -> bool {
        self.nodes
            .iter()
            .any(|(id, airport)| airport.connections.keys().any(|target| target != id))
    }
}
