//! Exhaustive journey search.
//!
//! Walks the graph depth-first from the origin, branching a copy of the
//! journey for every link to a station the journey has not visited yet.
//! Every path that reaches the destination is kept, so the ranking can
//! choose between journeys with different change profiles.
//!
//! The number of simple paths grows exponentially with the branching of the
//! network. Only modestly connected networks can be searched exhaustively;
//! [`SearchConfig::max_expansions`] caps the work for anything larger.
//! Pending journeys live on a heap-allocated stack, so long lines of
//! stations do not exhaust the thread's call stack.

use tracing::{debug, trace, warn};

use crate::domain::{Journey, StationIndex};
use crate::graph::Graph;

use super::config::SearchConfig;
use super::rank::rank_journeys;

/// Error from journey search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A requested station name is not on the network
    #[error("station not found on this network: {name}")]
    StationNotFound { name: String },
}

/// Request for journey search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Display name of the origin station.
    pub origin: String,

    /// Display name of the destination station.
    pub destination: String,

    /// Maximum number of journeys to return. Falls back to the planner's
    /// configuration when unset.
    pub max_results: Option<usize>,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            max_results: None,
        }
    }

    /// Limit the number of journeys returned.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

/// Result of journey search.
#[derive(Debug, Clone)]
pub struct SearchResult<'g> {
    /// Found journeys, ranked best-first.
    pub journeys: Vec<Journey<'g>>,

    /// Number of partial journeys created during search.
    pub paths_explored: usize,

    /// True if the expansion cutoff stopped the search early.
    pub truncated: bool,
}

/// Every completed journey found by [`enumerate_journeys`], unranked.
#[derive(Debug, Clone)]
pub struct Enumeration<'g> {
    pub journeys: Vec<Journey<'g>>,
    pub paths_explored: usize,
    pub truncated: bool,
}

/// Resolves origin and destination names to stations.
///
/// The origin is checked first, so it is the one reported when neither
/// name is known.
pub fn resolve_stations(
    graph: &Graph,
    origin: &str,
    destination: &str,
) -> Result<(StationIndex, StationIndex), SearchError> {
    let lookup = |name: &str| {
        graph
            .find_by_name(name)
            .ok_or_else(|| SearchError::StationNotFound {
                name: name.to_string(),
            })
    };
    Ok((lookup(origin)?, lookup(destination)?))
}

/// Finds every simple path from `origin` to `destination`.
///
/// Paths never revisit a station. A journey from a station to itself is
/// complete as soon as it starts. An unreachable destination yields no
/// journeys.
pub fn enumerate_journeys(
    graph: &Graph,
    origin: StationIndex,
    destination: StationIndex,
    max_expansions: Option<usize>,
) -> Enumeration<'_> {
    let mut explorer = Explorer {
        graph,
        destination,
        max_expansions,
        found: Vec::new(),
        explored: 0,
        truncated: false,
    };

    explorer.run(Journey::start(graph.station(origin)), origin);

    Enumeration {
        journeys: explorer.found,
        paths_explored: explorer.explored,
        truncated: explorer.truncated,
    }
}

/// A journey waiting for its remaining links to be tried.
struct Frame<'g> {
    journey: Journey<'g>,
    at: StationIndex,
    /// Route the journey arrived on; `None` before boarding.
    arrived_via: Option<&'g str>,
    /// Position in the station's link list of the next link to try.
    next_link: usize,
}

/// Depth-first search state shared by every branch of one enumeration.
struct Explorer<'g> {
    graph: &'g Graph,
    destination: StationIndex,
    max_expansions: Option<usize>,
    found: Vec<Journey<'g>>,
    explored: usize,
    truncated: bool,
}

impl<'g> Explorer<'g> {
    /// Walks the graph from `journey` using an explicit stack of frames, so
    /// depth is bounded by the heap rather than the thread's stack.
    ///
    /// Links are tried one at a time from the top frame, which visits
    /// journeys in the same order as a recursive walk would.
    fn run(&mut self, journey: Journey<'g>, origin: StationIndex) {
        let graph = self.graph;
        let mut stack = Vec::new();
        self.enter(&mut stack, journey, origin, None);

        while let Some(frame) = stack.last_mut() {
            let station = graph.station(frame.at);
            let Some(link) = station.links().get(frame.next_link) else {
                stack.pop();
                continue;
            };
            frame.next_link += 1;

            let next = graph.station(link.target);
            if frame.journey.visits(next) {
                continue;
            }

            if self.max_expansions.is_some_and(|max| self.explored >= max) {
                self.truncated = true;
                break;
            }
            self.explored += 1;

            let mut child = frame.journey.branch(next, link.distance);
            let route: &'g str = &link.route;
            if frame.arrived_via != Some(route) {
                child.board(station, route);
            }
            self.enter(&mut stack, child, link.target, Some(route));
        }
    }

    /// Completes `journey` if it is at the destination, otherwise queues it
    /// for extension.
    fn enter(
        &mut self,
        stack: &mut Vec<Frame<'g>>,
        mut journey: Journey<'g>,
        at: StationIndex,
        arrived_via: Option<&'g str>,
    ) {
        if at == self.destination {
            journey.arrive(self.graph.station(at));
            trace!(
                stations = journey.station_count(),
                distance = journey.distance(),
                changes = journey.changes(),
                "journey complete"
            );
            self.found.push(journey);
            return;
        }

        // A path that has visited every station cannot be extended.
        if journey.station_count() >= self.graph.len() {
            return;
        }

        stack.push(Frame {
            journey,
            at,
            arrived_via,
            next_link: 0,
        });
    }
}

/// Journey planner over a station graph.
///
/// Journeys borrow stations from the graph, so results live as long as the
/// graph rather than the planner.
pub struct Planner<'g, 'c> {
    graph: &'g Graph,
    config: &'c SearchConfig,
}

impl<'g, 'c> Planner<'g, 'c> {
    /// Create a new planner.
    pub fn new(graph: &'g Graph, config: &'c SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Search for journeys between two named stations.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult<'g>, SearchError> {
        let (origin, destination) =
            resolve_stations(self.graph, &request.origin, &request.destination)?;

        let enumeration =
            enumerate_journeys(self.graph, origin, destination, self.config.max_expansions);

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            found = enumeration.journeys.len(),
            paths_explored = enumeration.paths_explored,
            "search complete"
        );
        if enumeration.truncated {
            warn!(
                origin = %request.origin,
                destination = %request.destination,
                paths_explored = enumeration.paths_explored,
                "search stopped at expansion cutoff"
            );
        }

        let limit = request.max_results.unwrap_or(self.config.max_results);
        let journeys = rank_journeys(enumeration.journeys, limit);

        Ok(SearchResult {
            journeys,
            paths_explored: enumeration.paths_explored,
            truncated: enumeration.truncated,
        })
    }
}

/// Finds up to `max_results` journeys between two named stations, fewest
/// changes first and then shortest.
///
/// Searches exhaustively. Fails with [`SearchError::StationNotFound`] if
/// either name is not on the network.
pub fn find_routes<'g>(
    graph: &'g Graph,
    origin: &str,
    destination: &str,
    max_results: usize,
) -> Result<Vec<Journey<'g>>, SearchError> {
    let config = SearchConfig::exhaustive();
    let request = SearchRequest::new(origin, destination).with_max_results(max_results);
    let result = Planner::new(graph, &config).search(&request)?;
    Ok(result.journeys)
}
