//! The core of the router library.
//!
//! The engine module builds a graph from the locations of a
//! [`Registry`]. Any two locations within a distance threshold are
//! neighbors. Path finding algorithms are also provided to find the
//! shortest path between two locations.

/// The router engine module.
pub mod engine {
    use std::collections::HashMap;

    use ordered_float::OrderedFloat;
    use petgraph::{
        algo::astar, graph::NodeIndex, stable_graph::StableDiGraph, visit::EdgeRef,
    };

    use crate::{
        edge::Edge, haversine, location::Location, registry::Registry, route::ShortestPath,
        utils::graph::build_edges,
    };

    /// A Router struct contains a graph of locations and also a
    /// hashmap that maps a location name to its index in the graph.
    ///
    /// The graph is built once, so searches only pay for the
    /// expansion itself.
    #[derive(Debug)]
    pub struct Router<'a> {
        graph: StableDiGraph<&'a Location, OrderedFloat<f64>>,
        node_indices: HashMap<&'a str, NodeIndex>,
        edges: Vec<Edge<'a>>,
        constraint_km: f64,
    }

    /// Path finding algorithms.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub enum Algorithm {
        /// The Dijkstra algorithm.
        Dijkstra,
        /// The A Star algorithm, guided by the great-circle distance to
        /// the goal.
        AStar,
    }

    impl<'a> Router<'a> {
        /// Creates a new router over the locations of `registry`.
        ///
        /// # Arguments
        /// * `registry` - The locations to route between.
        /// * `constraint_km` - Locations at most this far apart are
        ///   connected. Edge weights are great-circle distances.
        pub fn new(registry: &'a Registry, constraint_km: f64) -> Router<'a> {
            info!(
                "Initializing the router engine for {} locations within {} km",
                registry.len(),
                constraint_km
            );

            let edges = build_edges(
                registry.locations(),
                constraint_km,
                haversine::distance_between,
                haversine::distance_between,
            );
            let mut node_indices = HashMap::new();
            let mut graph = StableDiGraph::new();

            // every location gets a node, even the unconnected ones
            for location in registry {
                let index = graph.add_node(location);
                node_indices.insert(location.name.as_str(), index);
            }

            for edge in &edges {
                if let (Some(&from_index), Some(&to_index)) = (
                    node_indices.get(edge.from.name.as_str()),
                    node_indices.get(edge.to.name.as_str()),
                ) {
                    graph.add_edge(from_index, to_index, edge.cost);
                }
            }

            debug!(
                "Router ready with {} nodes and {} edges",
                graph.node_count(),
                graph.edge_count()
            );
            Router {
                graph,
                node_indices,
                edges,
                constraint_km,
            }
        }

        /// Get the NodeIndex struct for a given location name. The
        /// NodeIndex struct is used to reference things in the graph.
        pub fn get_node_index(&self, name: &str) -> Option<NodeIndex> {
            self.node_indices.get(name).cloned()
        }

        /// Find the shortest path between two locations.
        ///
        /// The petgraph's dijkstra algorithm is an a star search with a
        /// zero heuristic, so the same function serves both. With
        /// [`Algorithm::AStar`] the heuristic is the great-circle
        /// distance to `to`, which never overestimates the remaining
        /// cost and keeps the result optimal.
        ///
        /// # Arguments
        /// * `from` - The canonical name to start from.
        /// * `to` - The canonical name to end at.
        /// * `algorithm` - The algorithm to use.
        ///
        /// # Returns
        /// The path as location names and its total distance, or
        /// [`None`] if either name is unknown or `to` is unreachable.
        /// Searching from a location to itself yields a single-node
        /// path of length 0.
        pub fn find_shortest_path(
            &self,
            from: &str,
            to: &str,
            algorithm: Algorithm,
        ) -> Option<ShortestPath> {
            let from_index = self.get_node_index(from)?;
            let to_index = self.get_node_index(to)?;
            let goal = self.graph[to_index];

            let (cost, indices) = match algorithm {
                Algorithm::Dijkstra => astar(
                    &self.graph,
                    from_index,
                    |finish| finish == to_index,
                    |e| e.weight().into_inner(),
                    |_| 0.0,
                ),
                Algorithm::AStar => astar(
                    &self.graph,
                    from_index,
                    |finish| finish == to_index,
                    |e| e.weight().into_inner(),
                    |node| haversine::distance_between(self.graph[node], goal),
                ),
            }?;
            debug!("{:?} search {} -> {}: {} km", algorithm, from, to, cost);

            Some(ShortestPath {
                path: indices
                    .into_iter()
                    .map(|index| self.graph[index].name.clone())
                    .collect(),
                distance_km: cost,
            })
        }

        /// Locations directly connected to `name`.
        pub fn neighbors(&self, name: &str) -> Vec<&'a Location> {
            match self.get_node_index(name) {
                Some(index) => self
                    .graph
                    .neighbors(index)
                    .map(|neighbor| self.graph[neighbor])
                    .collect(),
                None => Vec::new(),
            }
        }

        /// Get the number of nodes in the graph.
        pub fn get_node_count(&self) -> usize {
            self.graph.node_count()
        }

        /// Return the number of edges in the graph.
        pub fn get_edge_count(&self) -> usize {
            self.graph.edge_count()
        }

        /// Get all the edges in the graph.
        pub fn get_edges(&self) -> &[Edge<'a>] {
            &self.edges
        }

        /// The neighbor threshold the graph was built with.
        pub fn constraint_km(&self) -> f64 {
            self.constraint_km
        }
    }
}
