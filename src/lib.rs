//! Route Planning Library for Pakistani cities and destinations.
//! Handles name resolution, path-finding and route ranking.
//!
//! ```no_run
//! use safar_router::{planner::RoutePlanner, registry::Registry};
//!
//! let planner = RoutePlanner::new(Registry::pakistan());
//! let route = planner.find_route("Islamabad", "Skardu")?;
//! println!("{:?} in {} km", route.path, route.total_distance_km);
//! # Ok::<(), safar_router::error::RouteError>(())
//! ```

#[macro_use]
extern crate log;

pub mod types {
    pub mod config;
    pub mod edge;
    pub mod error;
    pub mod location;
    pub mod registry;
    pub mod route;
    pub mod router;
}

pub mod utils {
    pub mod estimate;
    pub mod generator;
    pub mod graph;
    pub mod haversine;
}

pub mod algorithms {
    pub mod graph;
}

pub mod planner;

pub use types::*;
pub use utils::{estimate, generator, haversine};
