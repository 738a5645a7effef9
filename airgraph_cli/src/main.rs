use clap::{Parser, Subcommand};

use crate::{
    betweenness::BetweennessArgs, bfs::BfsArgs, export::ExportArgs, info::InfoArgs,
    path::PathArgs,
};

mod betweenness;
mod bfs;
mod data_args;
mod export;
mod geojson_export;
mod info;
mod parsers;
mod path;
mod progress_bar;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summary of the loaded airport graph
    Info {
        #[command(flatten)]
        args: InfoArgs,
    },
    /// Shortest route between two airports
    #[command(visible_alias = "p")]
    Path {
        #[command(flatten)]
        args: PathArgs,
    },
    /// Airports reachable from a starting airport, in breadth-first order
    Bfs {
        #[command(flatten)]
        args: BfsArgs,
    },
    /// Rank airports by how often they are a stopover on shortest routes
    #[command(visible_alias = "b")]
    Betweenness {
        #[command(flatten)]
        args: BetweennessArgs,
    },
    /// Write the airport graph as GeoJSON
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Info { args }) => info::run(args)?,
        Some(Commands::Path { args }) => path::run(args)?,
        Some(Commands::Bfs { args }) => bfs::run(args)?,
        Some(Commands::Betweenness { args }) => betweenness::run(args)?,
        Some(Commands::Export { args }) => export::run(args)?,
        None => {}
    }

    Ok(())
}
