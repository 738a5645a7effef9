use std::path::PathBuf;

use airgraph_core::{
    error::GraphError,
    graph::{Graph, NodeId},
    routing::{dijkstra::Dijkstra, shortest_path_algorithm::ShortestPathAlgorithm},
};
use clap::Args;
use comfy_table::Table;
use serde::Serialize;
use tracing::info;

use crate::{
    data_args::DataArgs,
    geojson_export::{path_to_geojson, write_geojson},
};

#[derive(Args)]
pub struct PathArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Departure airport id
    #[arg(long)]
    from: NodeId,

    /// Arrival airport id
    #[arg(long)]
    to: NodeId,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,

    /// Also write the route as GeoJSON to this file
    #[arg(long)]
    geojson: Option<PathBuf>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Stop {
    id: NodeId,
    name: String,
    latitude: f64,
    longitude: f64,
    /// Distance from the previous stop
    leg: f64,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Route {
    from: NodeId,
    to: NodeId,
    /// `None` when `to` cannot be reached.
    distance: Option<f64>,
    stops: Vec<Stop>,
}

fn route(graph: &Graph, from: NodeId, to: NodeId) -> Result<Route, GraphError> {
    graph.airport(from)?;
    graph.airport(to)?;

    let mut dijkstra = Dijkstra::new();
    let path = dijkstra.calc_path(graph, from, to);

    let mut stops = Vec::with_capacity(path.len());
    let mut previous = None;
    for &id in &path {
        let airport = graph.airport(id)?;
        let leg = match previous {
            Some(previous) => graph.distance(previous, id)?,
            None => 0.0,
        };

        stops.push(Stop {
            id,
            name: airport.name().to_string(),
            latitude: airport.location().lat,
            longitude: airport.location().lng,
            leg,
        });
        previous = Some(id);
    }

    Ok(Route {
        from,
        to,
        distance: (!path.is_empty()).then(|| dijkstra.shortest_distance()),
        stops,
    })
}

pub fn run(args: PathArgs) -> Result<(), anyhow::Error> {
    let graph = args.data.load_graph(&mut args.data.rng())?;
    let route = route(&graph, args.from, args.to)?;

    if route.stops.is_empty() {
        info!("No route from {} to {}", args.from, args.to);
    }

    if let Some(path) = &args.geojson {
        let ids: Vec<NodeId> = route.stops.iter().map(|stop| stop.id).collect();
        write_geojson(path, &path_to_geojson(&graph, &ids)?)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Id", "Name", "Leg", "Total"]);
    let mut total = 0.0;
    for (index, stop) in route.stops.iter().enumerate() {
        total += stop.leg;
        table.add_row(vec![
            index.to_string(),
            stop.id.to_string(),
            stop.name.clone(),
            format!("{:.2}", stop.leg),
            format!("{:.2}", total),
        ]);
    }
    println!("{table}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use airgraph_core::distance_mode::DistanceMode;

    use super::*;

    // |1| --> |2| --> |3|    |4|
    fn graph() -> Graph {
        let mut graph = Graph::new(DistanceMode::Planar);
        graph.add_node(1, "One", 0.0, 0.0);
        graph.add_node(2, "Two", 0.0, 3.0);
        graph.add_node(3, "Three", 4.0, 3.0);
        graph.add_node(4, "Four", 9.0, 9.0);
        graph.connect(1, 2).unwrap();
        graph.connect(2, 3).unwrap();
        graph
    }

    #[test]
    fn test_route() {
        let route = route(&graph(), 1, 3).unwrap();

        assert_eq!(route.distance, Some(7.0));
        assert_eq!(
            route.stops.iter().map(|stop| stop.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            route.stops.iter().map(|stop| stop.leg).collect::<Vec<_>>(),
            vec![0.0, 3.0, 4.0]
        );
        assert_eq!(route.stops[1].name, "Two");
    }

    #[test]
    fn test_unreachable_route() {
        let route = route(&graph(), 1, 4).unwrap();

        assert_eq!(route.distance, None);
        assert!(route.stops.is_empty());
    }

    #[test]
    fn test_route_with_unknown_airport() {
        assert_eq!(route(&graph(), 1, 5), Err(GraphError::NodeNotFound(5)));
    }

    #[test]
    fn test_route_as_json() {
        let route = route(&graph(), 1, 2).unwrap();
        let json = serde_json::to_value(&route).unwrap();

        assert_eq!(json["distance"], serde_json::json!(3.0));
        assert_eq!(json["stops"][1]["name"], serde_json::json!("Two"));
    }
}
