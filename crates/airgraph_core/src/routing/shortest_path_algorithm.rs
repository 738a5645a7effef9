use crate::graph::{Graph, NodeId};

pub trait ShortestPathAlgorithm {
    /// Ids from `start` to `end` inclusive, or an empty path when either
    /// airport is unknown or `end` cannot be reached.
    fn calc_path(&mut self, graph: &Graph, start: NodeId, end: NodeId) -> Vec<NodeId>;

    /// Distance of the last computed path, infinity when it was not found.
    fn shortest_distance(&self) -> f64;
}
