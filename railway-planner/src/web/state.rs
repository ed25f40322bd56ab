//! Application state for the web layer.

use std::sync::Arc;

use crate::graph::{Graph, build_graph};
use crate::network::RailwayNetwork;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The network and its graph are built once at startup and never change.
#[derive(Clone)]
pub struct AppState {
    /// Network description, for summaries
    pub network: Arc<RailwayNetwork>,

    /// Station graph searched by the planner
    pub graph: Arc<Graph>,

    /// Journey planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state, building the graph for `network`.
    pub fn new(network: RailwayNetwork, config: SearchConfig) -> Self {
        let graph = build_graph(&network);
        Self {
            network: Arc::new(network),
            graph: Arc::new(graph),
            config: Arc::new(config),
        }
    }
}
