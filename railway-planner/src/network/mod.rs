//! Railway network descriptions.
//!
//! A network is a named list of routes, each an ordered list of stops. This
//! is the input the graph is built from; it is loaded from a JSON document
//! and validated once, so the graph builder can trust it.

mod error;
mod summary;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::StationId;

pub use error::NetworkError;
pub use summary::SortOrder;

/// A stop on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Position of the stop on its route, as published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<u32>,

    pub station_name: String,

    #[serde(rename = "stationID")]
    pub station_id: StationId,

    /// Distance to the next stop on the route. Absent on the last stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_to_next: Option<f64>,

    /// Distance to the previous stop on the route. Informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_to_prev: Option<f64>,
}

impl Stop {
    /// Creates a stop with no published position or backward distance.
    pub fn new(
        station_id: StationId,
        station_name: impl Into<String>,
        distance_to_next: Option<f64>,
    ) -> Self {
        Self {
            stop: None,
            station_name: station_name.into(),
            station_id,
            distance_to_next,
            distance_to_prev: None,
        }
    }
}

/// A named line through the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub stops: Vec<Stop>,
}

impl Route {
    pub fn new(name: impl Into<String>, stops: Vec<Stop>) -> Self {
        Self {
            name: name.into(),
            stops,
        }
    }
}

/// A complete network description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RailwayNetwork {
    pub network_name: String,
    pub routes: Vec<Route>,
}

impl RailwayNetwork {
    /// Creates a network from already validated routes.
    pub fn new(network_name: impl Into<String>, routes: Vec<Route>) -> Self {
        Self {
            network_name: network_name.into(),
            routes,
        }
    }

    /// Reads and validates a network description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let network = Self::from_json(&text)?;
        debug!(
            path = %path.display(),
            routes = network.routes.len(),
            "loaded network"
        );
        Ok(network)
    }

    /// Parses and validates a network description.
    pub fn from_json(text: &str) -> Result<Self, NetworkError> {
        let network: Self = serde_json::from_str(text)?;
        network.validate()?;
        Ok(network)
    }

    /// Checks that every stop but the last on each route has a usable
    /// distance to the next stop.
    pub fn validate(&self) -> Result<(), NetworkError> {
        for route in &self.routes {
            let last = route.stops.len().saturating_sub(1);
            for (idx, stop) in route.stops.iter().enumerate() {
                let negative = [stop.distance_to_next, stop.distance_to_prev]
                    .into_iter()
                    .flatten()
                    .any(|d| d < 0.0);
                if negative {
                    return Err(NetworkError::NegativeDistance {
                        route: route.name.clone(),
                        station: stop.station_name.clone(),
                    });
                }
                if idx < last && stop.distance_to_next.is_none() {
                    return Err(NetworkError::MissingDistance {
                        route: route.name.clone(),
                        station: stop.station_name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
