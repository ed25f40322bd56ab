//! Domain types for the railway planner.
//!
//! Stations and links form the network graph; journeys are paths through it.

mod journey;
mod station;

pub use journey::{Journey, UNBOARDED, render_journeys};
pub use station::{Link, Station, StationId, StationIndex};
