//! Helper functions for working with graphs.

use ordered_float::OrderedFloat;

use crate::{edge::Edge, location::Location};

/// Build edges among locations.
///
/// The function will try to connect every location to every other
/// location. A connection is only made when the value returned by
/// `constraint_function` is within `constraint` (inclusive).
///
/// For the route planner the constraint is the neighbor threshold in
/// kilometers: two places more than that far apart are only reachable
/// through intermediate places.
///
/// # Arguments
/// * `locations` - A slice of locations.
/// * `constraint` - Only locations within a constraint can be connected.
/// * `constraint_function` - A function that takes two locations and
///   returns a float to compare against `constraint`.
/// * `cost_function` - A function that computes the "weight" between
///   two locations.
///
/// # Returns
/// A vector of directed edges. Symmetric constraint functions produce
/// both directions of every connection.
///
/// # Time Complexity
/// *O*(*n^2*).
pub fn build_edges<'a>(
    locations: &'a [Location],
    constraint: f64,
    constraint_function: fn(&Location, &Location) -> f64,
    cost_function: fn(&Location, &Location) -> f64,
) -> Vec<Edge<'a>> {
    let mut edges = Vec::new();
    for from in locations {
        for to in locations {
            if from != to && constraint_function(from, to) <= constraint {
                let cost = cost_function(from, to);
                edges.push(Edge {
                    from,
                    to,
                    cost: OrderedFloat(cost),
                });
            }
        }
    }
    edges
}
