use thiserror::Error;

use crate::graph::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Airport {0} is not in the graph")]
    NodeNotFound(NodeId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CentralityError {
    #[error("Cannot sample paths: the graph has no pair of distinct connected airports")]
    NoConnectedPairs,
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read record from {path}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}
