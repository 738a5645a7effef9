//! Betweenness centrality: how often an airport is a stopover on the shortest
//! routes between other airports.
//!
//! Scores are plain counts. For every considered pair of distinct airports the
//! shortest path is computed and each airport strictly between the two
//! endpoints gains one point.
//!
//! - [`BetweennessCentrality::score_all`] considers every ordered pair, which
//!   costs `V²` shortest path computations.
//! - [`BetweennessCentrality::score_sample`] only considers a fixed number of
//!   randomly drawn pairs.
//!
//! Scores accumulate on the instance: scoring twice, or mixing both modes,
//! adds up. Create a new instance for an independent analysis.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use tracing::info;

use crate::{
    error::CentralityError,
    graph::{Graph, NodeId},
    progress::ProgressListener,
    routing::{dijkstra::Dijkstra, shortest_path_algorithm::ShortestPathAlgorithm},
    stopwatch::Stopwatch,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingOptions {
    /// When `true`, a drawn pair without any path does not count toward the
    /// requested sample size.
    pub skip_unreachable: bool,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        SamplingOptions {
            skip_unreachable: true,
        }
    }
}

pub struct BetweennessCentrality<A: ShortestPathAlgorithm = Dijkstra> {
    algorithm: A,
    scores: BTreeMap<NodeId, u64>,
    total_paths: u64,
    progress: Option<Box<dyn ProgressListener>>,
}

impl Default for BetweennessCentrality<Dijkstra> {
    fn default() -> Self {
        Self::new()
    }
}

impl BetweennessCentrality<Dijkstra> {
    pub fn new() -> Self {
        Self::with_algorithm(Dijkstra::new())
    }
}

impl<A: ShortestPathAlgorithm> BetweennessCentrality<A> {
    pub fn with_algorithm(algorithm: A) -> Self {
        BetweennessCentrality {
            algorithm,
            scores: BTreeMap::new(),
            total_paths: 0,
            progress: None,
        }
    }

    pub fn with_progress(mut self, listener: impl ProgressListener + 'static) -> Self {
        self.progress = Some(Box::new(listener));
        self
    }

    /// Accumulated scores, by airport id.
    pub fn scores(&self) -> &BTreeMap<NodeId, u64> {
        &self.scores
    }

    /// Number of ordered pairs of distinct airports considered by
    /// [`BetweennessCentrality::score_all`].
    pub fn total_paths(&self) -> u64 {
        self.total_paths
    }

    /// Scores every ordered pair of distinct airports. Every airport of the
    /// graph gets an entry.
    pub fn score_all(&mut self, graph: &Graph) -> &BTreeMap<NodeId, u64> {
        let stopwatch = Stopwatch::new("betweenness/score_all");
        let ids = graph.ids(true);

        self.progress_start();

        for (row, &from) in ids.iter().enumerate() {
            for &to in &ids {
                if from == to {
                    self.ensure_entry(from);
                    continue;
                }

                self.total_paths += 1;

                let path = self.algorithm.calc_path(graph, from, to);
                self.record_interior(&path);
            }

            self.progress_update((row + 1) as f64 / ids.len() as f64);
        }

        self.progress_finish();

        info!(
            total_paths = self.total_paths,
            airports = self.scores.len(),
            "Computed betweenness scores"
        );
        stopwatch.report();

        &self.scores
    }

    /// Scores `sample_size` randomly drawn pairs of distinct airports. The
    /// second airport of a pair is drawn among the airports without a score
    /// yet, as long as there is one.
    pub fn score_sample<R: Rng + ?Sized>(
        &mut self,
        graph: &Graph,
        sample_size: usize,
        options: SamplingOptions,
        rng: &mut R,
    ) -> Result<&BTreeMap<NodeId, u64>, CentralityError> {
        if sample_size == 0 {
            return Ok(&self.scores);
        }

        let ids = graph.ids(true);

        if ids.len() < 2
            || (options.skip_unreachable && !graph.has_route_between_distinct_nodes())
        {
            return Err(CentralityError::NoConnectedPairs);
        }

        let stopwatch = Stopwatch::new("betweenness/score_sample");
        self.progress_start();

        let mut sampled = 0;
        let mut draws = 0;

        while sampled < sample_size {
            let from = ids[rng.random_range(0..ids.len())];
            let to = self.draw_target(&ids, from, rng);
            draws += 1;

            let path = self.algorithm.calc_path(graph, from, to);

            if path.is_empty() {
                self.ensure_entry(from);
                self.ensure_entry(to);

                if options.skip_unreachable {
                    continue;
                }
            } else {
                self.record_interior(&path);
            }

            sampled += 1;
            self.progress_update(sampled as f64 / sample_size as f64);
        }

        self.progress_finish();

        info!(
            sampled,
            draws,
            airports = self.scores.len(),
            "Computed sampled betweenness scores"
        );
        stopwatch.report();

        Ok(&self.scores)
    }

    /// Airports whose accumulated score is at least `frequency`.
    pub fn airports_with_min_frequency(&self, frequency: u64) -> BTreeSet<NodeId> {
        self.scores
            .iter()
            .filter(|&(_, &score)| score >= frequency)
            .map(|(&id, _)| id)
            .collect()
    }

    fn draw_target<R: Rng + ?Sized>(&self, ids: &[NodeId], from: NodeId, rng: &mut R) -> NodeId {
        let unscored: Vec<NodeId> = ids
            .iter()
            .copied()
            .filter(|&id| id != from && !self.scores.contains_key(&id))
            .collect();

        let candidates = if unscored.is_empty() {
            ids.iter().copied().filter(|&id| id != from).collect()
        } else {
            unscored
        };

        candidates[rng.random_range(0..candidates.len())]
    }

    fn record_interior(&mut self, path: &[NodeId]) {
        if path.len() <= 2 {
            return;
        }

        for &id in &path[1..path.len() - 1] {
            *self.scores.entry(id).or_insert(0) += 1;
        }
    }

    #[inline(always)]
    fn ensure_entry(&mut self, id: NodeId) {
        self.scores.entry(id).or_insert(0);
    }

    fn progress_start(&mut self) {
        if let Some(progress) = self.progress.as_mut() {
            progress.start();
        }
    }

    fn progress_update(&mut self, fraction: f64) {
        if let Some(progress) = self.progress.as_mut() {
            progress.progress(fraction);
        }
    }

    fn progress_finish(&mut self) {
        if let Some(progress) = self.progress.as_mut() {
            progress.finish();
        }
    }
}
