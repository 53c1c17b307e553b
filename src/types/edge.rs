//! Definitions of the edge types.
//!
//! [`Edge`] connects two registry locations in the dense graph built
//! by the [`Router`](`crate::router::engine::Router`).
//! [`WeightedEdge`] is a caller-supplied connection between two names
//! for the explicit [`RoadGraph`](`crate::algorithms::graph::RoadGraph`).
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::location::Location;

/// An edge is a connection between two locations.
/// The cost represents the "weight" of the edge in kilometers.
#[derive(Debug, PartialEq, Hash, Eq)]
pub struct Edge<'a> {
    /// One end of the edge.
    pub from: &'a Location,

    /// The other end of the edge.
    pub to: &'a Location,

    /// The weight of the edge.
    pub cost: OrderedFloat<f64>,
}

/// A road between two named places with a weight in kilometers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub from: String,
    pub to: String,
    pub weight_km: f64,

    /// If set, the road can be travelled in both directions.
    #[serde(default)]
    pub bidirectional: bool,
}

impl WeightedEdge {
    /// A one-way road from `from` to `to`.
    pub fn directed(from: impl Into<String>, to: impl Into<String>, weight_km: f64) -> Self {
        WeightedEdge {
            from: from.into(),
            to: to.into(),
            weight_km,
            bidirectional: false,
        }
    }

    /// A two-way road.
    pub fn bidirectional(from: impl Into<String>, to: impl Into<String>, weight_km: f64) -> Self {
        WeightedEdge {
            bidirectional: true,
            ..WeightedEdge::directed(from, to, weight_km)
        }
    }
}
