//! Defines an explicit road graph and its shortest path search.
//!
//! Unlike the [`Router`](`crate::router::engine::Router`), which
//! connects every pair of registry locations within a threshold, a
//! [`RoadGraph`] only knows the roads it was given. Nodes are plain
//! names; no coordinates are needed.
//!
//! Node indices follow the order in which names are first seen, so
//! building the same graph twice yields the same search order.

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use petgraph::{algo::astar, graph::NodeIndex, stable_graph::StableDiGraph, visit::EdgeRef};

use crate::{
    edge::WeightedEdge,
    error::{Result, RouteError},
    route::ShortestPath,
};

/// Represents a directed, weighted graph of named places.
#[derive(Debug, Default)]
pub struct RoadGraph {
    graph: StableDiGraph<String, OrderedFloat<f64>>,
    node_indices: HashMap<String, NodeIndex>,
}

impl RoadGraph {
    /// Creates a graph from a list of roads. Both ends of every road
    /// become nodes.
    ///
    /// # Errors
    /// [`RouteError::InvalidEdgeWeight`] if a weight is negative or not
    /// finite.
    pub fn from_edges(edges: &[WeightedEdge]) -> Result<RoadGraph> {
        let mut road_graph = RoadGraph::default();
        for edge in edges {
            let from = road_graph.add_node(&edge.from);
            let to = road_graph.add_node(&edge.to);
            road_graph.add_edge(from, to, edge.weight_km)?;
            if edge.bidirectional {
                road_graph.add_edge(to, from, edge.weight_km)?;
            }
        }
        Ok(road_graph)
    }

    /// Creates a graph from an adjacency structure mapping each name
    /// to its neighbors and the weight of the road to each of them.
    ///
    /// Only the keys become nodes. A neighbor that is not itself a key
    /// is dropped along with its road.
    ///
    /// # Errors
    /// [`RouteError::InvalidEdgeWeight`] if a weight is negative or not
    /// finite.
    pub fn from_adjacency<I, J, S, T>(adjacency: I) -> Result<RoadGraph>
    where
        I: IntoIterator<Item = (S, J)>,
        J: IntoIterator<Item = (T, f64)>,
        S: Into<String>,
        T: Into<String>,
    {
        let adjacency: Vec<(String, Vec<(String, f64)>)> = adjacency
            .into_iter()
            .map(|(name, neighbors)| {
                (
                    name.into(),
                    neighbors
                        .into_iter()
                        .map(|(neighbor, weight)| (neighbor.into(), weight))
                        .collect(),
                )
            })
            .collect();

        let mut road_graph = RoadGraph::default();
        for (name, _) in &adjacency {
            road_graph.add_node(name);
        }
        for (name, neighbors) in &adjacency {
            let from = road_graph.node_indices[name];
            for (neighbor, weight) in neighbors {
                match road_graph.get_node_index(neighbor) {
                    Some(to) => road_graph.add_edge(from, to, *weight)?,
                    None => warn!(
                        "Dropping road {} -> {}: {} is not a node",
                        name, neighbor, neighbor
                    ),
                }
            }
        }
        Ok(road_graph)
    }

    /// Finds the shortest path between two places with Dijkstra's
    /// algorithm, stopping as soon as `end` is settled.
    ///
    /// # Returns
    /// [`None`] if either name is not a node or `end` cannot be
    /// reached from `start`.
    pub fn shortest_path(&self, start: &str, end: &str) -> Option<ShortestPath> {
        let start_index = self.get_node_index(start)?;
        let end_index = self.get_node_index(end)?;

        let (cost, indices) = astar(
            &self.graph,
            start_index,
            |finish| finish == end_index,
            |e| e.weight().into_inner(),
            |_| 0.0,
        )?;
        debug!("Dijkstra {} -> {}: {} km", start, end, cost);

        Some(ShortestPath {
            path: indices
                .into_iter()
                .map(|index| self.graph[index].clone())
                .collect(),
            distance_km: cost,
        })
    }

    /// Returns `true` if `name` is a node of the graph.
    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn get_node_index(&self, name: &str) -> Option<NodeIndex> {
        self.node_indices.get(name).cloned()
    }

    fn add_node(&mut self, name: &str) -> NodeIndex {
        let graph = &mut self.graph;
        *self
            .node_indices
            .entry(name.to_string())
            .or_insert_with(|| graph.add_node(name.to_string()))
    }

    fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, weight_km: f64) -> Result<()> {
        if !(weight_km.is_finite() && weight_km >= 0.0) {
            return Err(RouteError::InvalidEdgeWeight {
                from: self.graph[from].clone(),
                to: self.graph[to].clone(),
                weight: weight_km,
            });
        }
        self.graph.add_edge(from, to, OrderedFloat(weight_km));
        Ok(())
    }
}
