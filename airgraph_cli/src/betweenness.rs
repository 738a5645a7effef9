use std::{collections::BTreeMap, path::PathBuf};

use airgraph_core::{
    centrality::betweenness::{BetweennessCentrality, SamplingOptions},
    error::GraphError,
    graph::{Graph, NodeId},
};
use clap::Args;
use comfy_table::Table;
use serde::Serialize;
use tracing::info;

use crate::{
    data_args::DataArgs,
    geojson_export::{scores_to_geojson, write_geojson},
    progress_bar::ProgressBarListener,
};

#[derive(Args)]
pub struct BetweennessArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Score this many random pairs of airports instead of every pair
    #[arg(long)]
    samples: Option<usize>,

    /// Count sampled pairs without any route toward --samples
    #[arg(long, requires = "samples")]
    count_unreachable: bool,

    /// Only report airports scoring at least this much
    #[arg(long, default_value_t = 0)]
    min_frequency: u64,

    /// Number of airports to print
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// Print the ranking as JSON
    #[arg(long)]
    json: bool,

    /// Also write the scored airports as GeoJSON to this file
    #[arg(long)]
    geojson: Option<PathBuf>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct RankedAirport {
    id: NodeId,
    name: String,
    score: u64,
}

/// Airports with at least `min_frequency`, highest score first.
fn rank(
    graph: &Graph,
    centrality: &BetweennessCentrality,
    min_frequency: u64,
) -> Result<Vec<RankedAirport>, GraphError> {
    let scores = centrality.scores();

    let mut ranking = centrality
        .airports_with_min_frequency(min_frequency)
        .into_iter()
        .map(|id| {
            Ok(RankedAirport {
                id,
                name: graph.name(id)?.to_string(),
                score: scores.get(&id).copied().unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>, GraphError>>()?;

    ranking.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));

    Ok(ranking)
}

pub fn run(args: BetweennessArgs) -> Result<(), anyhow::Error> {
    let mut rng = args.data.rng();
    let graph = args.data.load_graph(&mut rng)?;

    let mut centrality = BetweennessCentrality::new()
        .with_progress(ProgressBarListener::new("Scoring airports"));

    match args.samples {
        Some(samples) => {
            let options = SamplingOptions {
                skip_unreachable: !args.count_unreachable,
            };
            centrality.score_sample(&graph, samples, options, &mut rng)?;
        }
        None => {
            centrality.score_all(&graph);
            info!("Scored {} pairs of airports", centrality.total_paths());
        }
    }

    let ranking = rank(&graph, &centrality, args.min_frequency)?;

    if let Some(path) = &args.geojson {
        let scores: BTreeMap<NodeId, u64> = ranking
            .iter()
            .map(|airport| (airport.id, airport.score))
            .collect();
        write_geojson(path, &scores_to_geojson(&graph, &scores)?)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Rank", "Id", "Name", "Score"]);
    for (index, airport) in ranking.iter().take(args.top).enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            airport.id.to_string(),
            airport.name.clone(),
            airport.score.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
