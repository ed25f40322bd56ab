//! Journey types.
//!
//! A `Journey` is one candidate path through the network, either still being
//! explored or complete. Journeys are plain values: the search extends a path
//! by branching off a copy, so sibling branches never observe each other.

use std::fmt::Write as _;

use tracing::warn;

use super::Station;

/// Change count of a journey that has not boarded any route yet.
///
/// Boarding the first route brings the count to zero, so a direct journey
/// reports zero changes.
pub const UNBOARDED: i32 = -1;

/// A path through the railway graph, from its origin to the latest station.
///
/// # Invariants
///
/// - At least one station (the origin)
/// - Distance is never negative and only grows as stations are added
///
/// The search guarantees that no station appears twice; `Journey` itself
/// does not check this.
#[derive(Debug, Clone)]
pub struct Journey<'g> {
    stations: Vec<&'g Station>,
    distance: f64,
    text: String,
    success: bool,
    changes: i32,
}

impl<'g> Journey<'g> {
    /// Starts a journey standing at `origin`.
    pub fn start(origin: &'g Station) -> Self {
        Self {
            stations: vec![origin],
            distance: 0.0,
            text: String::new(),
            success: false,
            changes: UNBOARDED,
        }
    }

    /// Returns a copy of this journey extended by one station.
    ///
    /// `self` is left untouched so it can be branched again.
    pub fn branch(&self, next: &'g Station, distance: f64) -> Self {
        let mut child = self.clone();
        child.stations.push(next);
        child.add_distance(distance);
        child
    }

    /// Adds to the accumulated distance.
    ///
    /// Negative or non-finite amounts are ignored so the distance never
    /// decreases.
    pub fn add_distance(&mut self, amount: f64) {
        if amount.is_finite() && amount >= 0.0 {
            self.distance += amount;
        } else {
            warn!(amount, "ignoring invalid distance increment");
        }
    }

    /// Records boarding `route` at `at`.
    ///
    /// The first boarding writes the journey header; later ones are changes.
    pub fn board(&mut self, at: &Station, route: &str) {
        if self.text.is_empty() {
            let _ = write!(
                self.text,
                "Journey Summary\n===============\nEmbark at {} on {}\n",
                at.name(),
                route
            );
        } else {
            let _ = writeln!(self.text, "At {} change to {}", at.name(), route);
        }
        self.changes += 1;
    }

    /// Marks the journey as having reached `destination`.
    pub fn arrive(&mut self, destination: &Station) {
        self.success = true;
        let _ = write!(self.text, "Arrive at {}\n\n\n", destination.name());
    }

    /// Stations visited so far, origin first.
    pub fn stations(&self) -> &[&'g Station] {
        &self.stations
    }

    /// Display names of the visited stations, origin first.
    pub fn station_names(&self) -> Vec<&'g str> {
        self.stations.iter().map(|&s| s.name()).collect()
    }

    pub fn origin(&self) -> &'g Station {
        self.stations[0]
    }

    /// The station the journey currently ends at.
    pub fn current(&self) -> &'g Station {
        self.stations[self.stations.len() - 1]
    }

    /// Number of stations visited, including the origin.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the journey already passes through `station`.
    pub fn visits(&self, station: &Station) -> bool {
        self.stations.iter().any(|s| s.id() == station.id())
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of route changes; [`UNBOARDED`] if no route was ever boarded.
    pub fn changes(&self) -> i32 {
        self.changes
    }

    /// Narrative of the journey, ready for display.
    pub fn narrative(&self) -> &str {
        &self.text
    }

    /// Returns true once the journey has reached its destination.
    pub fn is_complete(&self) -> bool {
        self.success
    }

    /// Renders the narrative followed by the journey totals.
    pub fn report(&self) -> String {
        let mut out = self.text.clone();
        let _ = write!(
            out,
            "Total distance: {}\nChanges: {}\nPassing through: ",
            self.distance, self.changes
        );
        for station in &self.stations {
            out.push_str(station.name());
            out.push_str(", ");
        }
        out.push_str("\n\n");
        out
    }
}

/// Renders a numbered list of journey reports.
pub fn render_journeys(journeys: &[Journey<'_>]) -> String {
    let mut out = format!("Found {} routes.\n\n", journeys.len());
    for (i, journey) in journeys.iter().enumerate() {
        let _ = write!(out, "{}: \n{}\n", i + 1, journey.report());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn station(id: u32, name: &str) -> Station {
        Station::new(StationId(id), name)
    }

    #[test]
    fn start_is_unboarded() {
        let euston = station(1, "Euston");
        let journey = Journey::start(&euston);

        assert_eq!(journey.station_count(), 1);
        assert_eq!(journey.origin(), &euston);
        assert_eq!(journey.current(), &euston);
        assert_eq!(journey.distance(), 0.0);
        assert_eq!(journey.changes(), UNBOARDED);
        assert!(journey.narrative().is_empty());
        assert!(!journey.is_complete());
    }

    #[test]
    fn branch_leaves_parent_untouched() {
        let euston = station(1, "Euston");
        let watford = station(2, "Watford Junction");
        let rugby = station(3, "Rugby");

        let parent = Journey::start(&euston);
        let child = parent.branch(&watford, 17.5);
        let sibling = parent.branch(&rugby, 82.0);

        assert_eq!(parent.station_count(), 1);
        assert_eq!(child.station_names(), vec!["Euston", "Watford Junction"]);
        assert_eq!(child.distance(), 17.5);
        assert_eq!(sibling.station_names(), vec!["Euston", "Rugby"]);
        assert_eq!(sibling.distance(), 82.0);
    }

    #[test]
    fn invalid_distance_is_ignored() {
        let a = station(1, "A");
        let mut journey = Journey::start(&a);
        journey.add_distance(4.0);
        journey.add_distance(-2.0);
        journey.add_distance(f64::NAN);
        assert_eq!(journey.distance(), 4.0);
    }

    #[test]
    fn first_boarding_counts_zero_changes() {
        let a = station(1, "Crewe");
        let b = station(2, "Stafford");
        let mut journey = Journey::start(&a);

        journey.board(&a, "West Coast Main Line");
        assert_eq!(journey.changes(), 0);
        assert_eq!(
            journey.narrative(),
            "Journey Summary\n===============\nEmbark at Crewe on West Coast Main Line\n"
        );

        journey.board(&b, "Cross Country");
        assert_eq!(journey.changes(), 1);
        assert!(journey.narrative().ends_with("At Stafford change to Cross Country\n"));
    }

    #[test]
    fn arrive_completes_journey() {
        let a = station(1, "Leeds");
        let mut journey = Journey::start(&a);
        journey.arrive(&a);

        assert!(journey.is_complete());
        assert_eq!(journey.narrative(), "Arrive at Leeds\n\n\n");
    }

    #[test]
    fn visits_compares_identifiers() {
        let a = station(1, "A");
        let b = station(2, "B");
        let a_again = station(1, "A");
        let journey = Journey::start(&a).branch(&b, 1.0);

        assert!(journey.visits(&a_again));
        assert!(journey.visits(&b));
        assert!(!journey.visits(&station(3, "C")));
    }

    #[test]
    fn report_lists_totals_and_stations() {
        let a = station(1, "Carlisle");
        let b = station(2, "Penrith");
        let mut journey = Journey::start(&a).branch(&b, 18.0);
        journey.board(&a, "West Coast Main Line");
        journey.arrive(&b);

        assert_eq!(
            journey.report(),
            "Journey Summary\n===============\nEmbark at Carlisle on West Coast Main Line\n\
             Arrive at Penrith\n\n\n\
             Total distance: 18\nChanges: 0\nPassing through: Carlisle, Penrith, \n\n"
        );
    }

    #[test]
    fn render_numbers_each_journey() {
        let a = station(1, "A");
        let journeys = vec![Journey::start(&a), Journey::start(&a)];
        let text = render_journeys(&journeys);

        assert!(text.starts_with("Found 2 routes.\n\n1: \n"));
        assert!(text.contains("\n2: \n"));
    }

    #[test]
    fn render_empty() {
        assert_eq!(render_journeys(&[]), "Found 0 routes.\n\n");
    }
}
