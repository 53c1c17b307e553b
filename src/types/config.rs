//! Tunables of the route planner.
//!
//! [`PlannerConfig`] deserializes with every field optional, so a
//! caller only needs to spell out what it changes.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::estimate::CostModel;

/// Two places farther apart than this are not direct neighbors.
pub const NEIGHBOR_THRESHOLD_KM: f64 = 500.0;
/// Detours longer than this multiple of the direct route are dropped.
pub const DETOUR_FACTOR: f64 = 1.3;
/// Hubs tried as detour waypoints by the alternatives ranker.
pub const MAJOR_HUBS: [&str; 6] = [
    "Islamabad",
    "Lahore",
    "Karachi",
    "Multan",
    "Rawalpindi",
    "Faisalabad",
];

/// Configuration of a [`RoutePlanner`](`crate::planner::RoutePlanner`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum great-circle distance between two directly connected
    /// places.
    pub neighbor_threshold_km: f64,

    /// Detour routes must not exceed the direct distance times this.
    pub detour_factor: f64,

    /// Detour waypoints, by name. Names are resolved against the
    /// planner's registry.
    pub major_hubs: Vec<String>,

    pub cost_model: CostModel,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            neighbor_threshold_km: NEIGHBOR_THRESHOLD_KM,
            detour_factor: DETOUR_FACTOR,
            major_hubs: MAJOR_HUBS.iter().map(|hub| hub.to_string()).collect(),
            cost_model: CostModel::default(),
        }
    }
}

impl PlannerConfig {
    /// Checks that every value is usable.
    ///
    /// # Errors
    /// [`RouteError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(RouteError::InvalidConfig(message));

        if !(self.neighbor_threshold_km.is_finite() && self.neighbor_threshold_km > 0.0) {
            return invalid(format!(
                "neighbor_threshold_km must be positive, got {}",
                self.neighbor_threshold_km
            ));
        }
        if !(self.detour_factor.is_finite() && self.detour_factor >= 1.0) {
            return invalid(format!(
                "detour_factor must be at least 1.0, got {}",
                self.detour_factor
            ));
        }

        let model = &self.cost_model;
        if !(model.average_speed_kmh.is_finite() && model.average_speed_kmh > 0.0) {
            return invalid(format!(
                "average_speed_kmh must be positive, got {}",
                model.average_speed_kmh
            ));
        }
        if !(model.fuel_cost_per_km.is_finite() && model.fuel_cost_per_km >= 0.0) {
            return invalid(format!(
                "fuel_cost_per_km must not be negative, got {}",
                model.fuel_cost_per_km
            ));
        }
        if !(model.toll_cost_per_leg.is_finite() && model.toll_cost_per_leg >= 0.0) {
            return invalid(format!(
                "toll_cost_per_leg must not be negative, got {}",
                model.toll_cost_per_leg
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PlannerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.neighbor_threshold_km, 500.0);
        assert_eq!(config.detour_factor, 1.3);
        assert_eq!(config.major_hubs.len(), MAJOR_HUBS.len());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PlannerConfig = serde_json::from_str(
            r#"{ "detour_factor": 1.5, "cost_model": { "toll_cost_per_leg": 0.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.detour_factor, 1.5);
        assert_eq!(config.neighbor_threshold_km, NEIGHBOR_THRESHOLD_KM);
        assert_eq!(config.cost_model.toll_cost_per_leg, 0.0);
        assert_eq!(config.cost_model.fuel_cost_per_km, CostModel::default().fuel_cost_per_km);
        assert_eq!(config.major_hubs, PlannerConfig::default().major_hubs);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            PlannerConfig {
                neighbor_threshold_km: 0.0,
                ..Default::default()
            },
            PlannerConfig {
                neighbor_threshold_km: f64::NAN,
                ..Default::default()
            },
            PlannerConfig {
                detour_factor: 0.9,
                ..Default::default()
            },
            PlannerConfig {
                cost_model: CostModel {
                    average_speed_kmh: 0.0,
                    ..Default::default()
                },
                ..Default::default()
            },
            PlannerConfig {
                cost_model: CostModel {
                    fuel_cost_per_km: -1.0,
                    ..Default::default()
                },
                ..Default::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(RouteError::InvalidConfig(_))),
                "{:?} should be rejected",
                config
            );
        }
    }
}
