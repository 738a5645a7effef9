//! Reader for the OpenFlights `airports.dat` and `routes.dat` files
//! (<https://openflights.org/data.html>).

use std::{
    collections::{BTreeSet, HashMap},
    fs::File,
    io::Read,
    path::Path,
};

use rand::Rng;
use tracing::{info, warn};

use crate::{
    distance_mode::DistanceMode,
    error::ParseError,
    graph::{Graph, NodeId},
    parsers::validation::{valid_iata, valid_id, valid_latitude, valid_longitude},
};

const AIRPORT_FIELDS: usize = 14;
const ROUTE_FIELDS: usize = 9;
const NULL_FIELD: &str = "\\N";

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub mode: DistanceMode,
    /// Only keep these airports.
    pub ids: Option<BTreeSet<NodeId>>,
    /// Only keep this many airport rows, drawn uniformly.
    pub sample_size: Option<usize>,
}

#[derive(Debug, Clone)]
struct AirportRecord {
    id: i64,
    name: String,
    iata: String,
    latitude: f64,
    longitude: f64,
}

impl AirportRecord {
    fn from_record(record: &csv::StringRecord) -> Option<Self> {
        if record.len() != AIRPORT_FIELDS {
            return None;
        }

        Some(AirportRecord {
            id: record[0].trim().parse().ok()?,
            name: record[1].to_string(),
            iata: record[4].to_string(),
            latitude: record[6].trim().parse().ok()?,
            longitude: record[7].trim().parse().ok()?,
        })
    }
}

#[derive(Debug, Default)]
struct LoadStatistics {
    airports: usize,
    skipped_airports: usize,
    routes: usize,
    skipped_routes: usize,
}

pub struct OpenFlightsParser {
    options: LoadOptions,
}

fn open(path: &Path) -> Result<File, ParseError> {
    File::open(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn records<R: Read>(
    reader: R,
    source: &str,
) -> impl Iterator<Item = Result<Option<csv::StringRecord>, ParseError>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .escape(Some(b'\\'))
        .from_reader(reader)
        .into_records()
        .map(move |result| match result {
            Ok(record) => Ok(Some(record)),
            Err(error) if error.is_io_error() => Err(ParseError::Csv {
                path: source.to_string(),
                source: error,
            }),
            Err(error) => {
                warn!("Skipping malformed line in {}: {}", source, error);
                Ok(None)
            }
        })
}

impl OpenFlightsParser {
    pub fn new(options: LoadOptions) -> Self {
        OpenFlightsParser { options }
    }

    pub fn parse<P: AsRef<Path>>(&self, airports: P, routes: P) -> Result<Graph, ParseError> {
        let airports = airports.as_ref();
        let routes = routes.as_ref();

        info!("Loading airports from {:?} and routes from {:?}", airports, routes);

        self.parse_readers(
            open(airports)?,
            open(routes)?,
            &mut rand::rng(),
        )
    }

    /// Like [`OpenFlightsParser::parse`], drawing the sampled airports from `rng`.
    pub fn parse_with_rng<P: AsRef<Path>, R: Rng + ?Sized>(
        &self,
        airports: P,
        routes: P,
        rng: &mut R,
    ) -> Result<Graph, ParseError> {
        self.parse_readers(open(airports.as_ref())?, open(routes.as_ref())?, rng)
    }

    pub fn parse_readers<A: Read, B: Read, R: Rng + ?Sized>(
        &self,
        airports: A,
        routes: B,
        rng: &mut R,
    ) -> Result<Graph, ParseError> {
        let mut graph = Graph::new(self.options.mode);
        let mut statistics = LoadStatistics::default();

        let mut records_read = Vec::new();
        for record in records(airports, "airports") {
            match record?.as_ref().and_then(AirportRecord::from_record) {
                Some(airport) => records_read.push(airport),
                None => statistics.skipped_airports += 1,
            }
        }

        let selected = match self.options.sample_size {
            Some(sample_size) if sample_size < records_read.len() => {
                let mut indices =
                    rand::seq::index::sample(rng, records_read.len(), sample_size).into_vec();
                indices.sort_unstable();
                indices
                    .into_iter()
                    .map(|index| records_read[index].clone())
                    .collect()
            }
            _ => records_read,
        };

        let iata_to_id = self.add_airports(&mut graph, &selected, &mut statistics);

        for record in records(routes, "routes") {
            let Some(record) = record? else {
                statistics.skipped_routes += 1;
                continue;
            };

            match Self::route_endpoints(&record, &iata_to_id) {
                Some((from, to)) if graph.contains(from) && graph.contains(to) => {
                    if graph.connect(from, to).is_ok() {
                        statistics.routes += 1;
                    }
                }
                _ => statistics.skipped_routes += 1,
            }
        }

        info!(
            airports = statistics.airports,
            skipped_airports = statistics.skipped_airports,
            routes = statistics.routes,
            skipped_routes = statistics.skipped_routes,
            "Loaded {} airports and {} connections",
            graph.size(),
            graph.connections()
        );

        Ok(graph)
    }

    fn add_airports(
        &self,
        graph: &mut Graph,
        airports: &[AirportRecord],
        statistics: &mut LoadStatistics,
    ) -> HashMap<String, NodeId> {
        let mut iata_to_id = HashMap::new();

        for airport in airports {
            let Some(id) = valid_id(airport.id) else {
                statistics.skipped_airports += 1;
                continue;
            };

            if valid_iata(&airport.iata) {
                iata_to_id.insert(airport.iata.clone(), id);
            }

            if !valid_latitude(airport.latitude) || !valid_longitude(airport.longitude) {
                statistics.skipped_airports += 1;
                continue;
            }

            if let Some(ids) = &self.options.ids {
                if !ids.contains(&id) {
                    continue;
                }
            }

            graph.add_node(id, airport.name.as_str(), airport.latitude, airport.longitude);
            statistics.airports += 1;
        }

        iata_to_id
    }

    /// A missing (`\N`) airport id is recovered from the IATA code.
    fn route_endpoint(
        iata: &str,
        id: &str,
        iata_to_id: &HashMap<String, NodeId>,
    ) -> Option<NodeId> {
        if id == NULL_FIELD {
            return iata_to_id.get(iata).copied();
        }

        valid_id(id.trim().parse().ok()?)
    }

    fn route_endpoints(
        record: &csv::StringRecord,
        iata_to_id: &HashMap<String, NodeId>,
    ) -> Option<(NodeId, NodeId)> {
        if record.len() != ROUTE_FIELDS {
            return None;
        }

        let from = Self::route_endpoint(&record[2], &record[3], iata_to_id)?;
        let to = Self::route_endpoint(&record[4], &record[5], iata_to_id)?;

        Some((from, to))
    }
}
