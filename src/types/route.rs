//! Search results and the [`Route`] handed back to callers.

use serde::{Deserialize, Serialize};

use crate::estimate::CostModel;

/// Raw output of a shortest path search: location names from start to
/// end, inclusive, and the unrounded total distance in kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub path: Vec<String>,
    pub distance_km: f64,
}

/// The search strategy that produced a [`Route`]. Informational only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteAlgorithm {
    Dijkstra,
    AStar,
    Greedy,
}

/// A fully described route between two places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Location names from origin to destination. Never holds two
    /// identical consecutive entries.
    pub path: Vec<String>,

    /// Great-circle length of the path, rounded to whole kilometers.
    pub total_distance_km: f64,

    /// Estimated driving time, rounded to whole minutes.
    pub total_time_minutes: f64,

    /// Estimated fuel and toll cost.
    pub estimated_cost: f64,

    /// Number of searches the route was composed of.
    pub legs: usize,

    /// Set on the best route of a comparison set.
    pub is_optimal: bool,

    pub algorithm: RouteAlgorithm,
}

impl Route {
    /// Builds a route from a search result, attaching time and cost
    /// estimates. The route is not marked optimal.
    ///
    /// Time and cost are derived from the rounded distance, so they
    /// agree with what a caller would compute from
    /// [`Route::total_distance_km`].
    pub fn from_path(
        shortest: ShortestPath,
        legs: usize,
        algorithm: RouteAlgorithm,
        cost_model: &CostModel,
    ) -> Route {
        let total_distance_km = shortest.distance_km.round();
        Route {
            path: shortest.path,
            total_distance_km,
            total_time_minutes: cost_model.estimate_time(total_distance_km, 1.0).round(),
            estimated_cost: cost_model.estimate_cost(total_distance_km, legs),
            legs,
            is_optimal: false,
            algorithm,
        }
    }

    /// The first location of the path.
    pub fn origin(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// The last location of the path.
    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Returns `true` if the path passes through `name`.
    pub fn passes_through(&self, name: &str) -> bool {
        self.path.iter().any(|stop| stop == name)
    }
}
