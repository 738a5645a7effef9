use airgraph_core::{
    distance_mode::DistanceMode,
    error::GraphError,
    graph::{Graph, NodeId},
};
use clap::Args;
use comfy_table::Table;

use crate::data_args::DataArgs;

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Number of most connected airports to list
    #[arg(long, default_value_t = 10)]
    top: usize,
}

/// Airports ordered by number of outgoing routes, most connected first.
fn most_connected(graph: &Graph) -> Result<Vec<(NodeId, usize)>, GraphError> {
    let mut counts = graph
        .ids(true)
        .into_iter()
        .map(|id| Ok((id, graph.connections_of(id, false)?.len())))
        .collect::<Result<Vec<_>, GraphError>>()?;

    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    Ok(counts)
}

pub fn run(args: InfoArgs) -> Result<(), anyhow::Error> {
    let graph = args.data.load_graph(&mut args.data.rng())?;
    let ranking = most_connected(&graph)?;

    let mut summary = Table::new();
    summary.add_row(vec![String::from("Airports"), graph.size().to_string()]);
    summary.add_row(vec![String::from("Connections"), graph.connections().to_string()]);
    summary.add_row(vec![
        String::from("Airports without routes"),
        ranking
            .iter()
            .filter(|&&(_, count)| count == 0)
            .count()
            .to_string(),
    ]);
    summary.add_row(vec![
        String::from("Distance"),
        match graph.distance_mode() {
            DistanceMode::Spherical => String::from("great-circle (km)"),
            DistanceMode::Planar => String::from("planar (degrees)"),
        },
    ]);
    println!("{summary}");

    let mut top = Table::new();
    top.set_header(vec!["Id", "Name", "Routes"]);
    for &(id, count) in ranking.iter().take(args.top) {
        top.add_row(vec![
            id.to_string(),
            graph.name(id)?.to_string(),
            count.to_string(),
        ]);
    }
    println!("{top}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_connected() {
        let mut graph = Graph::new(DistanceMode::Planar);
        for id in 1..=4 {
            graph.add_node(id, format!("air{id}"), 0.0, id as f64);
        }
        graph.connect(3, 1).unwrap();
        graph.connect(3, 2).unwrap();
        graph.connect(2, 1).unwrap();
        graph.connect(1, 2).unwrap();

        assert_eq!(
            most_connected(&graph).unwrap(),
            vec![(3, 2), (1, 1), (2, 1), (4, 0)]
        );
    }
}
