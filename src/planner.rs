//! Route planning on top of the router engine.
//!
//! A [`RoutePlanner`] resolves free-text place names against its
//! [`Registry`], runs A* searches on a [`Router`] built once from that
//! registry, and turns the results into [`Route`]s. It also ranks a
//! direct route against detours through major hubs.
//!
//! The planner holds no mutable state and can be shared between
//! threads.

use std::iter;

use crate::{
    config::PlannerConfig,
    error::{Result, RouteError},
    location::Location,
    registry::Registry,
    route::{Route, RouteAlgorithm, ShortestPath},
    router::engine::{Algorithm, Router},
};

/// Why a hub produced no alternative route.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The detour was found but is longer than the allowed multiple of
    /// the direct route.
    TooLong { distance_km: f64, limit_km: f64 },

    /// The detour could not be built at all.
    Unroutable(RouteError),
}

/// A hub that was tried and left out of the alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedHub {
    pub hub: String,
    pub reason: SkipReason,
}

/// Ranked routes between two places, with the hubs that were tried
/// and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternatives {
    /// Sorted by ascending distance. The first one is optimal.
    pub routes: Vec<Route>,
    pub skipped: Vec<SkippedHub>,
}

impl Alternatives {
    /// The route flagged as optimal.
    pub fn optimal(&self) -> Option<&Route> {
        self.routes.iter().find(|route| route.is_optimal)
    }
}

/// Plans routes between places of a [`Registry`].
#[derive(Debug)]
pub struct RoutePlanner<'a> {
    registry: &'a Registry,
    router: Router<'a>,
    config: PlannerConfig,
}

impl<'a> RoutePlanner<'a> {
    /// Creates a planner with the default configuration.
    pub fn new(registry: &'a Registry) -> RoutePlanner<'a> {
        let config = PlannerConfig::default();
        RoutePlanner {
            registry,
            router: Router::new(registry, config.neighbor_threshold_km),
            config,
        }
    }

    /// Creates a planner with a custom configuration.
    ///
    /// # Errors
    /// [`RouteError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn with_config(registry: &'a Registry, config: PlannerConfig) -> Result<RoutePlanner<'a>> {
        config.validate()?;
        Ok(RoutePlanner {
            registry,
            router: Router::new(registry, config.neighbor_threshold_km),
            config,
        })
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn router(&self) -> &Router<'a> {
        &self.router
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Finds the shortest route between two places.
    ///
    /// The route stands alone, so it is marked optimal.
    ///
    /// # Errors
    /// * [`RouteError::LocationNotFound`] if a name does not resolve.
    /// * [`RouteError::SameLocation`] if both names resolve to the same
    ///   place.
    /// * [`RouteError::NoPathFound`] if the places are not connected.
    pub fn find_route(&self, origin: &str, destination: &str) -> Result<Route> {
        info!("Finding route from {:?} to {:?}", origin, destination);
        let from = self.registry.resolve_or_err(origin)?;
        let to = self.registry.resolve_or_err(destination)?;
        if from == to {
            return Err(RouteError::SameLocation {
                name: from.name.clone(),
            });
        }

        let shortest = self.search(from, to).ok_or_else(|| {
            warn!("No route found between {} and {}", from.name, to.name);
            RouteError::NoPathFound {
                from: from.name.clone(),
                to: to.name.clone(),
            }
        })?;

        let mut route = Route::from_path(
            shortest,
            1,
            RouteAlgorithm::AStar,
            &self.config.cost_model,
        );
        route.is_optimal = true;
        debug!("Route: {:?}", route);
        Ok(route)
    }

    /// Finds a route that visits `stops` in order between `origin` and
    /// `destination`.
    ///
    /// Each pair of consecutive places is searched separately and the
    /// legs are joined without repeating the shared place. A stop that
    /// resolves to the same place as the one before it is dropped.
    ///
    /// # Errors
    /// * [`RouteError::LocationNotFound`] if any name does not resolve.
    /// * [`RouteError::SameLocation`] if every name resolves to one
    ///   place.
    /// * [`RouteError::PartialCompositionFailure`] if any leg of a
    ///   multi-leg route has no path. Nothing is returned for the other
    ///   legs.
    /// * [`RouteError::NoPathFound`] if the route has a single leg and
    ///   it has no path.
    pub fn find_route_with_stops(
        &self,
        origin: &str,
        destination: &str,
        stops: &[&str],
    ) -> Result<Route> {
        if stops.is_empty() {
            return self.find_route(origin, destination);
        }
        info!(
            "Finding route from {:?} to {:?} through {:?}",
            origin, destination, stops
        );

        let mut waypoints: Vec<&Location> = Vec::with_capacity(stops.len() + 2);
        for input in iter::once(&origin)
            .chain(stops.iter())
            .chain(iter::once(&destination))
        {
            let location = self.registry.resolve_or_err(input)?;
            if waypoints.last() == Some(&location) {
                debug!("Skipping repeated stop {}", location.name);
                continue;
            }
            waypoints.push(location);
        }

        let legs = waypoints.len() - 1;
        if legs == 0 {
            return Err(RouteError::SameLocation {
                name: waypoints[0].name.clone(),
            });
        }

        let mut path = vec![waypoints[0].name.clone()];
        let mut distance_km = 0.0;
        for (leg, pair) in waypoints.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            let shortest = self.search(from, to).ok_or_else(|| {
                warn!("Leg {} has no route: {} -> {}", leg + 1, from.name, to.name);
                if legs == 1 {
                    RouteError::NoPathFound {
                        from: from.name.clone(),
                        to: to.name.clone(),
                    }
                } else {
                    RouteError::PartialCompositionFailure {
                        leg: leg + 1,
                        from: from.name.clone(),
                        to: to.name.clone(),
                    }
                }
            })?;
            debug!("Leg {}: {:?}", leg + 1, shortest);

            path.extend(shortest.path.into_iter().skip(1));
            distance_km += shortest.distance_km;
        }

        let mut route = Route::from_path(
            ShortestPath { path, distance_km },
            legs,
            RouteAlgorithm::AStar,
            &self.config.cost_model,
        );
        route.is_optimal = true;
        debug!("Route: {:?}", route);
        Ok(route)
    }

    /// Finds the direct route and detours through the configured major
    /// hubs, ranked by distance.
    ///
    /// Hubs equal to the origin or the destination are not tried.
    /// Detours that fail or exceed `detour_factor` times the direct
    /// distance are reported in [`Alternatives::skipped`]. Routes with
    /// identical paths are kept.
    ///
    /// # Errors
    /// Only errors of the direct route are returned; see
    /// [`RoutePlanner::find_route`].
    pub fn alternatives(&self, origin: &str, destination: &str) -> Result<Alternatives> {
        let direct = self.find_route(origin, destination)?;
        let from = direct.path[0].clone();
        let to = direct.path[direct.path.len() - 1].clone();
        let limit_km = direct.total_distance_km * self.config.detour_factor;
        info!(
            "Looking for alternatives between {} and {} up to {} km",
            from, to, limit_km
        );

        let mut routes = vec![direct];
        let mut skipped = Vec::new();
        for hub in &self.config.major_hubs {
            if let Some(location) = self.registry.resolve(hub) {
                if location.name == from || location.name == to {
                    continue;
                }
            }

            match self.find_route_with_stops(&from, &to, &[hub.as_str()]) {
                Ok(route) if route.total_distance_km <= limit_km => {
                    debug!("Detour through {} kept: {} km", hub, route.total_distance_km);
                    routes.push(route);
                }
                Ok(route) => {
                    debug!("Detour through {} too long: {} km", hub, route.total_distance_km);
                    skipped.push(SkippedHub {
                        hub: hub.clone(),
                        reason: SkipReason::TooLong {
                            distance_km: route.total_distance_km,
                            limit_km,
                        },
                    });
                }
                Err(err) => {
                    warn!("Detour through {} skipped: {}", hub, err);
                    skipped.push(SkippedHub {
                        hub: hub.clone(),
                        reason: SkipReason::Unroutable(err),
                    });
                }
            }
        }

        mark_optimal(&mut routes);
        info!(
            "Found {} routes, skipped {} hubs",
            routes.len(),
            skipped.len()
        );
        Ok(Alternatives { routes, skipped })
    }

    /// Same as [`RoutePlanner::alternatives`], returning only the
    /// routes.
    pub fn get_alternatives(&self, origin: &str, destination: &str) -> Result<Vec<Route>> {
        Ok(self.alternatives(origin, destination)?.routes)
    }

    fn search(&self, from: &Location, to: &Location) -> Option<ShortestPath> {
        self.router
            .find_shortest_path(&from.name, &to.name, Algorithm::AStar)
    }
}

/// Sorts `routes` by ascending distance and flags the first one, and
/// only that one, as optimal. Routes of equal distance keep their
/// relative order. An empty slice is left alone.
pub fn mark_optimal(routes: &mut [Route]) {
    routes.sort_by(|a, b| a.total_distance_km.total_cmp(&b.total_distance_km));
    for (i, route) in routes.iter_mut().enumerate() {
        route.is_optimal = i == 0;
    }
}

#[cfg(test)]
mod planner_tests {
    use super::*;
    use crate::{estimate::CostModel, haversine};

    fn planner() -> RoutePlanner<'static> {
        RoutePlanner::new(Registry::pakistan())
    }

    /// Gilgit and Skardu are close, Karachi is more than 500 km from
    /// both.
    fn northern_fixture() -> Registry {
        Registry::new(vec![
            Location::new("Gilgit", 35.9208, 74.3089),
            Location::new("Skardu", 35.2971, 75.6333),
            Location::new("Karachi", 24.8607, 67.0011),
        ])
        .unwrap()
    }

    fn route(path: &[&str], distance_km: f64) -> Route {
        Route::from_path(
            ShortestPath {
                path: path.iter().map(|name| name.to_string()).collect(),
                distance_km,
            },
            1,
            RouteAlgorithm::AStar,
            &CostModel::default(),
        )
    }

    #[test]
    fn test_find_route_direct_hop() {
        let route = planner().find_route("Islamabad", "Lahore").unwrap();
        let registry = Registry::pakistan();
        let expected = haversine::distance_between(
            registry.get("Islamabad").unwrap(),
            registry.get("Lahore").unwrap(),
        );

        assert_eq!(route.path, vec!["Islamabad", "Lahore"]);
        assert_eq!(route.total_distance_km, expected.round());
        assert_eq!(route.legs, 1);
        assert!(route.is_optimal);
        assert_eq!(route.algorithm, RouteAlgorithm::AStar);
    }

    #[test]
    fn test_find_route_resolves_free_text() {
        let route = planner().find_route("  islamabad ", "kard").unwrap();
        assert_eq!(route.origin(), Some("Islamabad"));
        assert_eq!(route.destination(), Some("Skardu"));
    }

    #[test]
    fn test_find_route_errors() {
        let planner = planner();
        assert_eq!(
            planner.find_route("Atlantis", "Lahore"),
            Err(RouteError::LocationNotFound {
                input: "Atlantis".to_string()
            })
        );
        assert_eq!(
            planner.find_route("Lahore", "Atlantis"),
            Err(RouteError::LocationNotFound {
                input: "Atlantis".to_string()
            })
        );
        assert_eq!(
            planner.find_route("lahore", "LAHORE"),
            Err(RouteError::SameLocation {
                name: "Lahore".to_string()
            })
        );
    }

    #[test]
    fn test_no_path_is_stable() {
        let registry = northern_fixture();
        let planner = RoutePlanner::new(&registry);
        let expected = Err(RouteError::NoPathFound {
            from: "Gilgit".to_string(),
            to: "Karachi".to_string(),
        });

        assert_eq!(planner.find_route("Gilgit", "Karachi"), expected);
        assert_eq!(planner.find_route("Gilgit", "Karachi"), expected);
    }

    #[test]
    fn test_stops_compose_legs() {
        let route = planner()
            .find_route_with_stops("Islamabad", "Skardu", &["Gilgit"])
            .unwrap();
        let direct_legs = planner().find_route("Islamabad", "Gilgit").unwrap().total_distance_km
            + planner().find_route("Gilgit", "Skardu").unwrap().total_distance_km;

        assert_eq!(route.path, vec!["Islamabad", "Gilgit", "Skardu"]);
        assert_eq!(route.legs, 2);
        // the composed distance is rounded once, the legs separately
        assert!((route.total_distance_km - direct_legs).abs() <= 1.0);
        assert_eq!(
            route.estimated_cost,
            CostModel::default().estimate_cost(route.total_distance_km, 2)
        );
    }

    #[test]
    fn test_stops_without_stops_is_single_route() {
        let planner = planner();
        assert_eq!(
            planner.find_route_with_stops("Islamabad", "Lahore", &[]),
            planner.find_route("Islamabad", "Lahore")
        );
    }

    #[test]
    fn test_repeated_stops_are_dropped() {
        let route = planner()
            .find_route_with_stops("Islamabad", "Skardu", &["islamabad", "Gilgit", "GILGIT"])
            .unwrap();
        assert_eq!(route.path, vec!["Islamabad", "Gilgit", "Skardu"]);
        assert_eq!(route.legs, 2);

        assert_eq!(
            planner().find_route_with_stops("Lahore", "Lahore", &["Lahore"]),
            Err(RouteError::SameLocation {
                name: "Lahore".to_string()
            })
        );
    }

    #[test]
    fn test_round_trip_through_a_stop() {
        let route = planner()
            .find_route_with_stops("Islamabad", "Islamabad", &["Murree"])
            .unwrap();
        assert_eq!(route.path, vec!["Islamabad", "Murree", "Islamabad"]);
    }

    #[test]
    fn test_stops_fail_as_a_whole() {
        let registry = northern_fixture();
        let planner = RoutePlanner::new(&registry);

        assert_eq!(
            planner.find_route_with_stops("Gilgit", "Karachi", &["Skardu"]),
            Err(RouteError::PartialCompositionFailure {
                leg: 2,
                from: "Skardu".to_string(),
                to: "Karachi".to_string(),
            })
        );
        assert_eq!(
            planner.find_route_with_stops("Gilgit", "Skardu", &["Atlantis"]),
            Err(RouteError::LocationNotFound {
                input: "Atlantis".to_string()
            })
        );
    }

    #[test]
    fn test_alternatives_islamabad_lahore() {
        let alternatives = planner().alternatives("Islamabad", "Lahore").unwrap();
        let direct = &alternatives.routes[0];

        assert_eq!(direct.path, vec!["Islamabad", "Lahore"]);
        assert!(direct.is_optimal);
        assert_eq!(alternatives.optimal(), Some(direct));

        // Rawalpindi is next door, so the detour survives
        assert_eq!(alternatives.routes.len(), 2);
        assert_eq!(alternatives.routes[1].path, vec!["Islamabad", "Rawalpindi", "Lahore"]);
        assert!(!alternatives.routes[1].is_optimal);

        let skipped: Vec<&str> = alternatives
            .skipped
            .iter()
            .map(|skipped| skipped.hub.as_str())
            .collect();
        assert_eq!(skipped, vec!["Karachi", "Multan", "Faisalabad"]);
        for skipped in &alternatives.skipped {
            match skipped.reason {
                SkipReason::TooLong {
                    distance_km,
                    limit_km,
                } => assert!(distance_km > limit_km),
                SkipReason::Unroutable(_) => panic!("{} should be routable", skipped.hub),
            }
        }
    }

    #[test]
    fn test_alternatives_report_unroutable_hubs() {
        let registry = northern_fixture();
        let planner = RoutePlanner::new(&registry);
        let alternatives = planner.alternatives("Gilgit", "Skardu").unwrap();

        assert_eq!(alternatives.routes.len(), 1);
        assert!(alternatives.routes[0].is_optimal);
        // Karachi resolves but is out of reach, the other hubs are unknown
        assert_eq!(alternatives.skipped.len(), PlannerConfig::default().major_hubs.len());
        assert!(alternatives.skipped.iter().all(|skipped| matches!(
            skipped.reason,
            SkipReason::Unroutable(_)
        )));
        let karachi = alternatives
            .skipped
            .iter()
            .find(|skipped| skipped.hub == "Karachi")
            .unwrap();
        assert_eq!(
            karachi.reason,
            SkipReason::Unroutable(RouteError::PartialCompositionFailure {
                leg: 1,
                from: "Gilgit".to_string(),
                to: "Karachi".to_string(),
            })
        );
    }

    #[test]
    fn test_alternatives_propagate_direct_errors() {
        let registry = northern_fixture();
        let planner = RoutePlanner::new(&registry);
        assert!(matches!(
            planner.alternatives("Gilgit", "Karachi"),
            Err(RouteError::NoPathFound { .. })
        ));
        assert!(matches!(
            planner.get_alternatives("Atlantis", "Karachi"),
            Err(RouteError::LocationNotFound { .. })
        ));
    }

    #[test]
    fn test_custom_detour_factor() {
        let config = PlannerConfig {
            detour_factor: 3.0,
            ..Default::default()
        };
        let planner = RoutePlanner::with_config(Registry::pakistan(), config).unwrap();
        let routes = planner.get_alternatives("Islamabad", "Lahore").unwrap();

        // Multan (728 km) fits under 3x, Karachi (2210 km) does not
        assert!(routes.iter().any(|route| route.passes_through("Multan")));
        assert!(!routes.iter().any(|route| route.passes_through("Karachi")));
        assert_eq!(routes.iter().filter(|route| route.is_optimal).count(), 1);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = PlannerConfig {
            neighbor_threshold_km: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            RoutePlanner::with_config(Registry::pakistan(), config),
            Err(RouteError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_mark_optimal() {
        let mut routes = vec![
            route(&["A", "C", "B"], 310.0),
            route(&["A", "B"], 270.0),
            route(&["A", "D", "B"], 290.0),
        ];
        routes[0].is_optimal = true;
        mark_optimal(&mut routes);

        let distances: Vec<f64> = routes.iter().map(|r| r.total_distance_km).collect();
        assert_eq!(distances, vec![270.0, 290.0, 310.0]);
        assert!(routes[0].is_optimal);
        assert!(!routes[1].is_optimal);
        assert!(!routes[2].is_optimal);
    }

    #[test]
    fn test_mark_optimal_ties_and_empty() {
        let mut routes = vec![route(&["A", "B"], 100.0), route(&["A", "B"], 100.0)];
        mark_optimal(&mut routes);
        assert_eq!(routes.iter().filter(|r| r.is_optimal).count(), 1);
        assert!(routes[0].is_optimal);

        let mut empty: Vec<Route> = Vec::new();
        mark_optimal(&mut empty);
        assert!(empty.is_empty());
    }
}
