//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Journey;
use crate::network::{RailwayNetwork, Route};
use crate::planner::SearchResult;

/// Request to plan journeys between two stations.
#[derive(Debug, Deserialize)]
pub struct PlanJourneyRequest {
    /// Origin station name
    pub origin: String,

    /// Destination station name
    pub destination: String,

    /// Maximum number of journeys to return
    pub max_results: Option<usize>,
}

/// A journey option.
#[derive(Debug, Serialize)]
pub struct JourneyResult {
    /// Total distance travelled
    pub distance: f64,

    /// Number of route changes (-1 when origin and destination coincide)
    pub changes: i32,

    /// Station names in travel order, origin first
    pub stations: Vec<String>,

    /// Human-readable journey summary
    pub narrative: String,
}

/// Response for journey planning.
#[derive(Debug, Serialize)]
pub struct PlanJourneyResponse {
    /// Found journey options, best first
    pub journeys: Vec<JourneyResult>,

    /// Number of partial journeys explored
    pub paths_explored: usize,

    /// Whether the search hit its expansion cutoff
    pub truncated: bool,
}

/// One route in the network summary.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub name: String,

    /// First station on the route
    pub from: Option<String>,

    /// Last station on the route
    pub to: Option<String>,

    pub stops: usize,

    /// Total route distance
    pub distance: f64,
}

/// Response describing the loaded network.
#[derive(Debug, Serialize)]
pub struct NetworkSummaryResponse {
    pub name: String,
    pub total_stations: usize,

    /// Name of the longest route, if the network has any
    pub longest_route: Option<String>,

    pub routes: Vec<RouteResult>,
}

/// One route with its station-by-station listing.
#[derive(Debug, Serialize)]
pub struct RouteReportResponse {
    #[serde(flatten)]
    pub route: RouteResult,

    /// Stations with the running distance at each
    pub report: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<&Journey<'_>> for JourneyResult {
    fn from(journey: &Journey<'_>) -> Self {
        Self {
            distance: journey.distance(),
            changes: journey.changes(),
            stations: journey
                .station_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            narrative: journey.narrative().to_string(),
        }
    }
}

impl From<&SearchResult<'_>> for PlanJourneyResponse {
    fn from(result: &SearchResult<'_>) -> Self {
        Self {
            journeys: result.journeys.iter().map(JourneyResult::from).collect(),
            paths_explored: result.paths_explored,
            truncated: result.truncated,
        }
    }
}

impl From<&Route> for RouteResult {
    fn from(route: &Route) -> Self {
        Self {
            name: route.name.clone(),
            from: route.first_station().map(str::to_string),
            to: route.last_station().map(str::to_string),
            stops: route.stops.len(),
            distance: route.distance(),
        }
    }
}

impl From<&RailwayNetwork> for NetworkSummaryResponse {
    fn from(network: &RailwayNetwork) -> Self {
        Self {
            name: network.name().to_string(),
            total_stations: network.total_stations(),
            longest_route: network.longest_route().map(|r| r.name.clone()),
            routes: network.routes().iter().map(RouteResult::from).collect(),
        }
    }
}

impl From<&Route> for RouteReportResponse {
    fn from(route: &Route) -> Self {
        Self {
            route: RouteResult::from(route),
            report: route.to_report(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;
    use crate::graph::Graph;
    use crate::network::Stop;
    use crate::planner::find_routes;

    fn network() -> RailwayNetwork {
        RailwayNetwork::new(
            "Test Network",
            vec![
                Route::new(
                    "Red",
                    vec![
                        Stop::new(StationId(1), "S1", Some(10.0)),
                        Stop::new(StationId(2), "S2", Some(5.0)),
                        Stop::new(StationId(3), "S3", None),
                    ],
                ),
                Route::new("Empty", vec![]),
            ],
        )
    }

    #[test]
    fn journey_result_from_journey() {
        let graph = Graph::from_routes(&network().routes);
        let journeys = find_routes(&graph, "S1", "S3", 1).unwrap();

        let result = JourneyResult::from(&journeys[0]);
        assert_eq!(result.distance, 15.0);
        assert_eq!(result.changes, 0);
        assert_eq!(result.stations, vec!["S1", "S2", "S3"]);
        assert!(result.narrative.starts_with("Journey Summary"));
    }

    #[test]
    fn network_summary_from_network() {
        let summary = NetworkSummaryResponse::from(&network());

        assert_eq!(summary.name, "Test Network");
        assert_eq!(summary.total_stations, 3);
        assert_eq!(summary.longest_route.as_deref(), Some("Red"));
        assert_eq!(summary.routes.len(), 2);

        let red = &summary.routes[0];
        assert_eq!(red.from.as_deref(), Some("S1"));
        assert_eq!(red.to.as_deref(), Some("S3"));
        assert_eq!(red.stops, 3);
        assert_eq!(red.distance, 15.0);

        let empty = &summary.routes[1];
        assert!(empty.from.is_none());
        assert_eq!(empty.distance, 0.0);
    }

    #[test]
    fn journey_result_serializes() {
        let result = JourneyResult {
            distance: 13.0,
            changes: 1,
            stations: vec!["S1".into(), "S2".into(), "S5".into()],
            narrative: "Arrive at S5\n".into(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["distance"], 13.0);
        assert_eq!(json["changes"], 1);
        assert_eq!(json["stations"][2], "S5");
    }
}
