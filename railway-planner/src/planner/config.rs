//! Search configuration for the journey planner.

/// Configuration parameters for journey search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of journeys to return when a request does not say.
    pub max_results: usize,

    /// Maximum number of partial journeys the search may create.
    ///
    /// The number of simple paths grows exponentially with the branching of
    /// the network, so servers should keep a cutoff. `None` searches
    /// exhaustively.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_results: usize, max_expansions: Option<usize>) -> Self {
        Self {
            max_results,
            max_expansions,
        }
    }

    /// Default configuration without an expansion cutoff.
    pub fn exhaustive() -> Self {
        Self {
            max_expansions: None,
            ..Self::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            max_expansions: Some(250_000),
        }
    }
}
