use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;
use tracing::debug;

use crate::constants::UNREACHABLE;
use crate::graph::{Graph, NodeId};
use crate::stopwatch::Stopwatch;

use super::shortest_path_algorithm::ShortestPathAlgorithm;

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    weight: f64,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip both keys to make this a min-heap, lowest id first on ties
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

struct NodeData {
    weight: f64,
    settled: bool,
    parent: Option<NodeId>,
}

impl NodeData {
    fn new(weight: f64) -> Self {
        NodeData {
            weight,
            settled: false,
            parent: None,
        }
    }
}

/// Single-source shortest path with lazy deletion of stale heap entries.
pub struct Dijkstra {
    heap: BinaryHeap<HeapItem>,
    data: FxHashMap<NodeId, NodeData>,
    shortest_distance: f64,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra {
            heap: BinaryHeap::new(),
            data: FxHashMap::default(),
            shortest_distance: UNREACHABLE,
        }
    }

    fn init(&mut self, graph: &Graph, start: NodeId) {
        self.heap.clear();
        self.data.clear();

        for node_id in graph.ids(false) {
            let weight = if node_id == start { 0.0 } else { UNREACHABLE };
            self.data.insert(node_id, NodeData::new(weight));
            self.heap.push(HeapItem { node_id, weight });
        }
    }

    fn update_node_data(&mut self, node: NodeId, weight: f64, parent: NodeId) {
        let data = self
            .data
            .entry(node)
            .or_insert_with(|| NodeData::new(UNREACHABLE));
        data.weight = weight;
        data.parent = Some(parent);
    }

    #[inline(always)]
    fn is_settled(&self, node: NodeId) -> bool {
        self.data.get(&node).is_some_and(|data| data.settled)
    }

    #[inline(always)]
    fn set_settled(&mut self, node: NodeId) {
        if let Some(data) = self.data.get_mut(&node) {
            data.settled = true;
        }
    }

    #[inline(always)]
    fn current_shortest_weight(&self, node: NodeId) -> f64 {
        self.data.get(&node).map_or(UNREACHABLE, |data| data.weight)
    }

    #[inline(always)]
    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.data.get(&node).and_then(|data| data.parent)
    }

    fn build_path(&self, start: NodeId, end: NodeId) -> Vec<NodeId> {
        let mut path = vec![end];

        let mut node = end;
        while let Some(parent) = self.parent(node) {
            path.push(parent);
            node = parent;
        }

        path.reverse();

        // The chain did not lead back to the start: unreachable
        if path[0] != start {
            return Vec::new();
        }

        path
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(&mut self, graph: &Graph, start: NodeId, end: NodeId) -> Vec<NodeId> {
        let stopwatch = Stopwatch::new("dijkstra/calc_path");
        self.shortest_distance = UNREACHABLE;

        if !graph.contains(start) || !graph.contains(end) {
            return Vec::new();
        }

        self.init(graph, start);

        let mut iterations = 0;
        let mut relaxations = 0;

        while let Some(HeapItem { node_id, weight }) = self.heap.pop() {
            // Stale entry of an already settled node
            if self.is_settled(node_id) {
                continue;
            }

            self.set_settled(node_id);
            iterations += 1;

            let Ok(edges) = graph.edges(node_id) else {
                continue;
            };

            for (adj_node, edge_weight) in edges {
                let next_weight = weight + edge_weight;

                if next_weight < self.current_shortest_weight(adj_node) {
                    self.update_node_data(adj_node, next_weight, node_id);
                    self.heap.push(HeapItem {
                        node_id: adj_node,
                        weight: next_weight,
                    });
                    relaxations += 1;
                }
            }
        }

        self.shortest_distance = self.current_shortest_weight(end);

        debug!(start, end, iterations, relaxations, "Dijkstra finished");
        stopwatch.report();

        self.build_path(start, end)
    }

    fn shortest_distance(&self) -> f64 {
        self.shortest_distance
    }
}
