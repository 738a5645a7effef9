use std::{collections::BTreeMap, fs, path::Path};

use airgraph_core::{
    error::GraphError,
    graph::{Graph, NodeId},
};
use geojson::{
    Feature, FeatureCollection, GeoJson, Geometry, JsonObject,
    Value::{LineString, Point},
};
use serde_json::json;
use tracing::info;

fn airport_feature(
    graph: &Graph,
    id: NodeId,
    score: Option<u64>,
) -> Result<Feature, GraphError> {
    let airport = graph.airport(id)?;

    let mut properties = JsonObject::new();
    properties.insert(String::from("id"), json!(id));
    properties.insert(String::from("name"), json!(airport.name()));
    if let Some(score) = score {
        properties.insert(String::from("score"), json!(score));
    }

    Ok(Feature {
        geometry: Some(Geometry::new(Point(
            <[f64; 2]>::from(&airport.location()).to_vec(),
        ))),
        properties: Some(properties),
        id: None,
        bbox: None,
        foreign_members: None,
    })
}

fn line_feature(graph: &Graph, ids: &[NodeId]) -> Result<Feature, GraphError> {
    let coordinates = ids
        .iter()
        .map(|&id| graph.location(id).map(|location| <[f64; 2]>::from(&location).to_vec()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut properties = JsonObject::new();
    properties.insert(String::from("airports"), json!(ids));

    Ok(Feature {
        geometry: Some(Geometry::new(LineString(coordinates))),
        properties: Some(properties),
        id: None,
        bbox: None,
        foreign_members: None,
    })
}

fn collection(features: Vec<Feature>) -> GeoJson {
    GeoJson::FeatureCollection(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

/// Every airport as a point and every route as a line.
pub fn graph_to_geojson(graph: &Graph) -> Result<GeoJson, GraphError> {
    let mut features = Vec::with_capacity(graph.size() + graph.connections());

    for id in graph.ids(true) {
        features.push(airport_feature(graph, id, None)?);
    }

    for from in graph.ids(true) {
        for to in graph.connections_of(from, true)? {
            features.push(line_feature(graph, &[from, to])?);
        }
    }

    Ok(collection(features))
}

/// The airports along `path` and one line through all of them.
pub fn path_to_geojson(graph: &Graph, path: &[NodeId]) -> Result<GeoJson, GraphError> {
    let mut features = path
        .iter()
        .map(|&id| airport_feature(graph, id, None))
        .collect::<Result<Vec<_>, _>>()?;

    if path.len() > 1 {
        features.push(line_feature(graph, path)?);
    }

    Ok(collection(features))
}

/// The visited airports with their position in `order` as a property.
pub fn traversal_to_geojson(graph: &Graph, order: &[NodeId]) -> Result<GeoJson, GraphError> {
    let features = order
        .iter()
        .enumerate()
        .map(|(index, &id)| {
            let mut feature = airport_feature(graph, id, None)?;
            feature.set_property("order", index);
            Ok(feature)
        })
        .collect::<Result<Vec<_>, GraphError>>()?;

    Ok(collection(features))
}

/// The scored airports with their score as a property.
pub fn scores_to_geojson(
    graph: &Graph,
    scores: &BTreeMap<NodeId, u64>,
) -> Result<GeoJson, GraphError> {
    let features = scores
        .iter()
        .map(|(&id, &score)| airport_feature(graph, id, Some(score)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(collection(features))
}

pub fn write_geojson(path: &Path, geojson: &GeoJson) -> Result<(), anyhow::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, geojson.to_string())?;
    info!("Wrote GeoJSON to {:?}", path);

    Ok(())
}
