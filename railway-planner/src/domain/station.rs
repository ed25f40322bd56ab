//! Station and link types.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A station identifier as published in the network description.
///
/// Identifiers are unique across the whole network: two stops carrying the
/// same identifier on different routes are the same physical station.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a station in the graph's station arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIndex(pub usize);

/// A directed, route-labelled edge to a neighbouring station.
///
/// The graph is undirected: every link has a twin pointing the other way
/// with the same route and distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Route this edge belongs to.
    pub route: Arc<str>,
    /// Station at the far end of the link.
    pub target: StationIndex,
    /// Cached display name of `target`.
    pub target_name: Arc<str>,
    /// Distance along the link, never negative.
    pub distance: f64,
}

/// A node of the railway graph.
///
/// Stations are created once per identifier while the graph is built and
/// only ever gain links afterwards.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    name: Arc<str>,
    links: Vec<Link>,
}

impl Station {
    /// Creates a station with no links.
    pub fn new(id: StationId, name: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            name: name.into(),
            links: Vec::new(),
        }
    }

    /// Returns the station identifier.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the shared display name.
    pub fn shared_name(&self) -> &Arc<str> {
        &self.name
    }

    /// Outgoing links in insertion order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub(crate) fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_station_has_no_links() {
        let station = Station::new(StationId(7), "Crewe");
        assert_eq!(station.id(), StationId(7));
        assert_eq!(station.name(), "Crewe");
        assert!(station.links().is_empty());
    }

    #[test]
    fn links_keep_insertion_order() {
        let mut station = Station::new(StationId(1), "Preston");
        for (i, name) in ["Lancaster", "Wigan"].into_iter().enumerate() {
            station.add_link(Link {
                route: Arc::from("West Coast Main Line"),
                target: StationIndex(i + 1),
                target_name: Arc::from(name),
                distance: 20.0,
            });
        }

        let names: Vec<&str> = station.links().iter().map(|l| &*l.target_name).collect();
        assert_eq!(names, vec!["Lancaster", "Wigan"]);
    }

    #[test]
    fn equality_is_by_identifier() {
        let a = Station::new(StationId(3), "York");
        let b = Station::new(StationId(3), "York (renamed)");
        let c = Station::new(StationId(4), "York");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn id_display_and_debug() {
        assert_eq!(StationId(42).to_string(), "42");
        assert_eq!(format!("{:?}", StationId(42)), "StationId(42)");
    }

    #[test]
    fn id_deserializes_from_bare_integer() {
        let id: StationId = serde_json::from_str("19").unwrap();
        assert_eq!(id, StationId(19));
    }
}
