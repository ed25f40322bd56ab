//! Journey planner using exhaustive depth-first search.
//!
//! This module answers: "what are all the ways of getting from this station
//! to that one without passing through any station twice?" Journeys are
//! ranked by the number of route changes and then by distance.

mod config;
mod rank;
mod search;


pub use config::SearchConfig;
pub use rank::rank_journeys;
pub use search::{
    Enumeration, Planner, SearchError, SearchRequest, SearchResult, enumerate_journeys,
    find_routes, resolve_stations,
};
