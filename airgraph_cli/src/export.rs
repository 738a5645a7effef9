use std::path::PathBuf;

use clap::Args;

use crate::{
    data_args::DataArgs,
    geojson_export::{graph_to_geojson, write_geojson},
};

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    data: DataArgs,

    /// GeoJSON output file
    #[arg(short, long)]
    out: PathBuf,
}

pub fn run(args: ExportArgs) -> Result<(), anyhow::Error> {
    let graph = args.data.load_graph(&mut args.data.rng())?;

    write_geojson(&args.out, &graph_to_geojson(&graph)?)
}
