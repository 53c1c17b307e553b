//! Error type shared by the registry, the search engines and the
//! route planner.

use thiserror::Error;

/// Convenient result alias for the router library.
pub type Result<T> = std::result::Result<T, RouteError>;

/// Everything that can go wrong while planning a route.
///
/// "No path" from the low-level search engines is an [`Option::None`];
/// the planner turns it into [`RouteError::NoPathFound`] or
/// [`RouteError::PartialCompositionFailure`] depending on where it
/// happened.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Free-text input matched no registry entry, exactly or by
    /// substring.
    #[error("location not recognized: {input:?}")]
    LocationNotFound { input: String },

    /// Both endpoints resolved, but the search exhausted the graph
    /// without reaching the goal.
    #[error("no route found between {from} and {to}")]
    NoPathFound { from: String, to: String },

    /// One leg of a multi-stop itinerary had no path. `leg` is 1-based.
    #[error("leg {leg} of the itinerary has no route between {from} and {to}")]
    PartialCompositionFailure { leg: usize, from: String, to: String },

    /// Origin and destination resolved to the same place with no
    /// distinct stop in between.
    #[error("origin and destination both resolve to {name}")]
    SameLocation { name: String },

    /// Two registry entries share a name (compared case-insensitively).
    #[error("duplicate location name in registry: {name}")]
    DuplicateLocation { name: String },

    /// A registry entry had an empty or whitespace-only name.
    #[error("location name must not be blank: {name:?}")]
    BlankLocationName { name: String },

    /// An explicit graph edge had a negative or non-finite weight.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidEdgeWeight { from: String, to: String, weight: f64 },

    /// A planner configuration value is out of range.
    #[error("invalid planner configuration: {0}")]
    InvalidConfig(String),
}
