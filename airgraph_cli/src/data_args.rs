use std::{collections::BTreeSet, path::PathBuf};

use airgraph_core::{
    distance_mode::DistanceMode,
    graph::{Graph, NodeId},
    parsers::openflights::{LoadOptions, OpenFlightsParser},
    stopwatch::Stopwatch,
};
use clap::Args;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

use crate::parsers;

/// Where the airport graph comes from and how it is built.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// OpenFlights airports.dat file
    #[arg(long, env = "AIRGRAPH_AIRPORTS")]
    pub airports: PathBuf,

    /// OpenFlights routes.dat file
    #[arg(long, env = "AIRGRAPH_ROUTES")]
    pub routes: PathBuf,

    /// Weigh routes with the euclidean distance between coordinates instead
    /// of the great-circle distance
    #[arg(long)]
    pub planar: bool,

    /// Only load these airports (e.g. "3830,3797,4049")
    #[arg(long, value_parser = parsers::parse_ids)]
    pub ids: Option<BTreeSet<NodeId>>,

    /// Only load this many randomly chosen airports
    #[arg(long)]
    pub sample: Option<usize>,

    /// Seed for every random choice, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DataArgs {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            mode: if self.planar {
                DistanceMode::Planar
            } else {
                DistanceMode::Spherical
            },
            ids: self.ids.clone(),
            sample_size: self.sample,
        }
    }

    pub fn load_graph(&self, rng: &mut StdRng) -> Result<Graph, anyhow::Error> {
        let stopwatch = Stopwatch::new("load graph");

        let graph = OpenFlightsParser::new(self.load_options()).parse_with_rng(
            &self.airports,
            &self.routes,
            rng,
        )?;

        info!(
            "Graph has {} airports and {} connections",
            graph.size(),
            graph.connections()
        );
        stopwatch.report();

        Ok(graph)
    }
}
