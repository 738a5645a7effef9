use std::collections::VecDeque;

use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    error::GraphError,
    graph::{Graph, NodeId},
};

/// Breadth-first traversal following routes in their direction only.
#[derive(Default)]
pub struct Bfs {
    queue: VecDeque<NodeId>,
    visited: FxHashMap<NodeId, bool>,
    order: Vec<NodeId>,
}

impl Bfs {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self, graph: &Graph) {
        self.queue.clear();
        self.order.clear();
        self.visited.clear();

        for id in graph.ids(false) {
            self.visited.insert(id, false);
        }
    }

    #[inline(always)]
    fn visit(&mut self, id: NodeId) -> bool {
        let visited = self.visited.entry(id).or_insert(false);
        if *visited {
            return false;
        }
        *visited = true;
        true
    }

    /// Airports reachable from `start`, in visitation order. Neighbours are
    /// enqueued by ascending id.
    pub fn traverse(&mut self, graph: &Graph, start: NodeId) -> Result<Vec<NodeId>, GraphError> {
        if !graph.contains(start) {
            return Err(GraphError::NodeNotFound(start));
        }

        self.reset(graph);

        self.visit(start);
        self.queue.push_back(start);

        while let Some(current) = self.queue.pop_front() {
            self.order.push(current);

            for adj_node in graph.connections_of(current, true)? {
                if self.visit(adj_node) {
                    self.queue.push_back(adj_node);
                }
            }
        }

        debug!(start, visited = self.order.len(), "BFS finished");

        Ok(self.order.clone())
    }

    /// Order produced by the last call to [`Bfs::traverse`].
    pub fn last_traversal(&self) -> &[NodeId] {
        &self.order
    }
}
