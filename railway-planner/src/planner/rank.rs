//! Journey ranking for search results.

use std::cmp::Ordering;

use crate::domain::Journey;

/// Rank journeys by preference and keep the best `limit`.
///
/// Journeys are ranked by:
/// 1. Number of changes (fewer is better)
/// 2. Total distance (shorter is better)
///
/// The sort is stable, so journeys equal on both keys keep the order in
/// which the search found them.
pub fn rank_journeys(mut journeys: Vec<Journey<'_>>, limit: usize) -> Vec<Journey<'_>> {
    journeys.sort_by(|a, b| {
        let changes_cmp = a.changes().cmp(&b.changes());
        if changes_cmp != Ordering::Equal {
            return changes_cmp;
        }

        a.distance().total_cmp(&b.distance())
    });

    journeys.truncate(limit);
    journeys
}
