pub mod centrality;
mod constants;
pub mod distance_mode;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod parsers;
pub mod progress;
pub mod routing;
pub mod stopwatch;
pub mod traversal;

#[cfg(test)]
pub(crate) mod test_graph_utils;
