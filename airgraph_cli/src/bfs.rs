use std::path::PathBuf;

use airgraph_core::{graph::NodeId, traversal::bfs::Bfs};
use clap::Args;
use comfy_table::Table;

use crate::{
    data_args::DataArgs,
    geojson_export::{traversal_to_geojson, write_geojson},
};

#[derive(Args)]
pub struct BfsArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Starting airport id
    #[arg(long)]
    start: NodeId,

    /// Print the visited airport ids as JSON
    #[arg(long)]
    json: bool,

    /// Also write the visited airports as GeoJSON to this file
    #[arg(long)]
    geojson: Option<PathBuf>,
}

pub fn run(args: BfsArgs) -> Result<(), anyhow::Error> {
    let graph = args.data.load_graph(&mut args.data.rng())?;

    let mut bfs = Bfs::new();
    let order = bfs.traverse(&graph, args.start)?;

    if let Some(path) = &args.geojson {
        write_geojson(path, &traversal_to_geojson(&graph, &order)?)?;
    }

    if args.json {
        println!("{}", serde_json::to_string(&order)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Id", "Name"]);
    for (index, &id) in order.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            id.to_string(),
            graph.name(id)?.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use geojson::GeoJson;
    use tempfile::TempDir;

    use super::*;
    use crate::data_args::tests::data_args;

    #[test]
    fn test_run_writes_traversal_geojson() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("bfs.geojson");

        run(BfsArgs {
            data: data_args(dir.path()),
            start: 4049,
            json: true,
            geojson: Some(out.clone()),
        })
        .unwrap();

        let GeoJson::FeatureCollection(collection) =
            fs::read_to_string(&out).unwrap().parse::<GeoJson>().unwrap()
        else {
            panic!("Expected a feature collection");
        };

        let visited: Vec<_> = collection
            .features
            .iter()
            .map(|feature| feature.property("id").cloned().unwrap())
            .collect();
        assert_eq!(
            visited,
            vec![
                serde_json::json!(4049),
                serde_json::json!(3830),
                serde_json::json!(3797)
            ]
        );
    }
}
