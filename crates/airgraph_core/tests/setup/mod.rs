#![allow(dead_code)]

use std::path::PathBuf;

use airgraph_core::{
    distance_mode::DistanceMode,
    graph::Graph,
    parsers::openflights::{LoadOptions, OpenFlightsParser},
};

pub const NRT: u32 = 2279;
pub const PEK: u32 = 3364;
pub const SFO: u32 = 3469;
pub const LAX: u32 = 3484;
pub const SJC: u32 = 3748;
pub const JFK: u32 = 3797;
pub const ORD: u32 = 3830;
pub const CMI: u32 = 4049;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture_graph(options: LoadOptions) -> Graph {
    OpenFlightsParser::new(options)
        .parse(fixture("airports.dat"), fixture("routes.dat"))
        .unwrap()
}

pub fn load_default_graph() -> Graph {
    load_fixture_graph(LoadOptions {
        mode: DistanceMode::Spherical,
        ..LoadOptions::default()
    })
}
