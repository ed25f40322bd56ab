//! Railway network graph.
//!
//! Converts the route listing of a [`RailwayNetwork`] into a graph of
//! stations joined by route-labelled links. A station served by several
//! routes becomes a single node carrying the links of all of them.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Link, Station, StationId, StationIndex};
use crate::network::{RailwayNetwork, Route, Stop};

/// The station graph. Owns every station; links refer to stations by index.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    stations: Vec<Station>,
    by_id: HashMap<StationId, StationIndex>,
}

impl Graph {
    /// Builds the graph for a list of routes.
    ///
    /// Each pair of consecutive stops on a route is joined by a link in both
    /// directions, weighted by the first stop's distance to the next. A
    /// missing distance is treated as zero; [`RailwayNetwork::load`] rejects
    /// such input before it gets here.
    pub fn from_routes(routes: &[Route]) -> Self {
        let mut graph = Self::default();

        for route in routes {
            let label: Arc<str> = Arc::from(route.name.as_str());
            let mut previous: Option<(StationIndex, &Stop)> = None;

            for stop in &route.stops {
                let current = graph.resolve(stop);

                if let Some((prev, prev_stop)) = previous {
                    if prev != current {
                        let distance = prev_stop.distance_to_next.unwrap_or(0.0);
                        graph.connect(prev, current, &label, distance);
                    }
                }

                previous = Some((current, stop));
            }
        }

        debug!(
            stations = graph.stations.len(),
            routes = routes.len(),
            "built network graph"
        );

        graph
    }

    /// Number of stations in the graph.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All stations, in order of first appearance.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns the station at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` did not come from this graph.
    pub fn station(&self, index: StationIndex) -> &Station {
        &self.stations[index.0]
    }

    /// Looks up a station by identifier.
    pub fn index_of(&self, id: StationId) -> Option<StationIndex> {
        self.by_id.get(&id).copied()
    }

    /// Finds a station by display name.
    ///
    /// Names are not guaranteed unique; when several stations share one,
    /// the last in graph order is returned.
    pub fn find_by_name(&self, name: &str) -> Option<StationIndex> {
        self.stations
            .iter()
            .rposition(|s| s.name() == name)
            .map(StationIndex)
    }

    /// Returns the station for `stop`, creating it on first sight.
    fn resolve(&mut self, stop: &Stop) -> StationIndex {
        if let Some(index) = self.by_id.get(&stop.station_id) {
            return *index;
        }
        let index = StationIndex(self.stations.len());
        self.stations
            .push(Station::new(stop.station_id, stop.station_name.as_str()));
        self.by_id.insert(stop.station_id, index);
        index
    }

    /// Adds a link each way between two stations.
    fn connect(&mut self, a: StationIndex, b: StationIndex, route: &Arc<str>, distance: f64) {
        let a_name = self.stations[a.0].shared_name().clone();
        let b_name = self.stations[b.0].shared_name().clone();

        self.stations[b.0].add_link(Link {
            route: route.clone(),
            target: a,
            target_name: a_name,
            distance,
        });
        self.stations[a.0].add_link(Link {
            route: route.clone(),
            target: b,
            target_name: b_name,
            distance,
        });
    }
}

/// Builds the station graph for a network.
pub fn build_graph(network: &RailwayNetwork) -> Graph {
    Graph::from_routes(&network.routes)
}
