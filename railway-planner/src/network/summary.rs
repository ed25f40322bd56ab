//! Descriptive reports over a network description.

use std::collections::HashSet;
use std::fmt::Write as _;

use super::{RailwayNetwork, Route};

/// Direction for sorting routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl Route {
    /// Total length of the route: the sum of every stop's distance to the
    /// next. A missing distance counts as zero.
    pub fn distance(&self) -> f64 {
        self.stops
            .iter()
            .map(|s| s.distance_to_next.unwrap_or(0.0))
            .sum()
    }

    /// Name of the first station on the route.
    pub fn first_station(&self) -> Option<&str> {
        self.stops.first().map(|s| s.station_name.as_str())
    }

    /// Name of the last station on the route.
    pub fn last_station(&self) -> Option<&str> {
        self.stops.last().map(|s| s.station_name.as_str())
    }

    /// Lists the stations of the route with the running distance at each.
    pub fn to_report(&self) -> String {
        let mut out = format!("ROUTE: {}\nSTATIONS:\n", self.name);
        let mut running = 0.0;
        for (idx, stop) in self.stops.iter().enumerate() {
            let position = stop.stop.map_or(idx + 1, |n| n as usize);
            let _ = writeln!(out, "{} {} {} miles", position, stop.station_name, running);
            running += stop.distance_to_next.unwrap_or(0.0);
        }
        let _ = write!(out, "Total Route Distance:{running}");
        out
    }
}

impl RailwayNetwork {
    pub fn name(&self) -> &str {
        &self.network_name
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Route names in network order.
    pub fn route_names(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.name.as_str()).collect()
    }

    /// Route names, one per line.
    pub fn route_names_to_string(&self) -> String {
        self.route_names().join(",\n")
    }

    /// Finds a route by exact name.
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Number of distinct stations across all routes.
    pub fn total_stations(&self) -> usize {
        self.routes
            .iter()
            .flat_map(|r| r.stops.iter().map(|s| s.station_id))
            .collect::<HashSet<_>>()
            .len()
    }

    /// The longest route. On ties, the earliest route wins.
    pub fn longest_route(&self) -> Option<&Route> {
        self.routes.iter().reduce(|best, route| {
            if route.distance() > best.distance() {
                route
            } else {
                best
            }
        })
    }

    /// Sorts the routes by name.
    pub fn sort_routes_by_name(&mut self, order: SortOrder) {
        self.routes.sort_by(|a, b| match order {
            SortOrder::Ascending => a.name.cmp(&b.name),
            SortOrder::Descending => b.name.cmp(&a.name),
        });
    }

    /// Sorts the routes by total distance.
    pub fn sort_routes_by_length(&mut self, order: SortOrder) {
        self.routes.sort_by(|a, b| match order {
            SortOrder::Ascending => a.distance().total_cmp(&b.distance()),
            SortOrder::Descending => b.distance().total_cmp(&a.distance()),
        });
    }

    /// One aligned line per route: name, endpoints and length.
    pub fn route_summary(&self) -> String {
        let mut out = String::from("Routes Summary\n========\n");
        for route in &self.routes {
            let mut line = route.name.clone();
            pad_to(&mut line, 25);
            line.push('-');
            pad_to(&mut line, 35);
            line.push_str(route.first_station().unwrap_or_default());
            pad_to(&mut line, 50);
            line.push_str("to");
            pad_to(&mut line, 60);
            line.push_str(route.last_station().unwrap_or_default());
            pad_to(&mut line, 75);
            line.push('-');
            pad_to(&mut line, 80);
            let _ = writeln!(line, "{} miles", route.distance());
            out.push_str(&line);
        }
        out
    }

    /// Full text overview: route names, the aligned summary and the longest
    /// route's station listing.
    pub fn overview(&self) -> String {
        let mut out = format!(
            "{}
{} routes, {} stations

{}

{}",
            self.network_name,
            self.routes.len(),
            self.total_stations(),
            self.route_names_to_string(),
            self.route_summary()
        );
        if let Some(longest) = self.longest_route() {
            let _ = write!(out, "
Longest route
{}
", longest.to_report());
        }
        out
    }
}

/// Pads `s` with spaces up to `width` characters. Longer strings are kept.
fn pad_to(s: &mut String, width: usize) {
    let len = s.chars().count();
    if len < width {
        s.extend(std::iter::repeat_n(' ', width - len));
    }
}
