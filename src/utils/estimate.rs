//! Travel time and cost estimation.
//!
//! Both models are linear in distance so that routes can be compared
//! by distance alone.

use serde::{Deserialize, Serialize};

/// Average road speed assumed for travel time estimates.
pub const AVG_SPEED_KMH: f64 = 60.0;
/// Fuel cost in PKR per kilometer driven.
pub const FUEL_COST_PER_KM: f64 = 15.0;
/// Toll cost in PKR charged once per leg of a route.
pub const TOLL_COST_PER_LEG: f64 = 250.0;

/// Constants of the time and cost estimates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    pub average_speed_kmh: f64,
    pub fuel_cost_per_km: f64,
    pub toll_cost_per_leg: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel {
            average_speed_kmh: AVG_SPEED_KMH,
            fuel_cost_per_km: FUEL_COST_PER_KM,
            toll_cost_per_leg: TOLL_COST_PER_LEG,
        }
    }
}

impl CostModel {
    /// Estimates the driving time in minutes.
    ///
    /// `traffic_factor` scales the result for congestion; `1.0` is
    /// free-flowing traffic.
    pub fn estimate_time(&self, distance_km: f64, traffic_factor: f64) -> f64 {
        distance_km / self.average_speed_kmh * 60.0 * traffic_factor
    }

    /// Estimates the cost of a trip of `distance_km` split over `legs`
    /// legs.
    pub fn estimate_cost(&self, distance_km: f64, legs: usize) -> f64 {
        distance_km * self.fuel_cost_per_km + legs as f64 * self.toll_cost_per_leg
    }
}

/// Estimates the driving time in minutes with the default
/// [`CostModel`].
pub fn estimate_time(distance_km: f64, traffic_factor: f64) -> f64 {
    CostModel::default().estimate_time(distance_km, traffic_factor)
}

/// Estimates the trip cost with the default [`CostModel`].
pub fn estimate_cost(distance_km: f64, legs: usize) -> f64 {
    CostModel::default().estimate_cost(distance_km, legs)
}
