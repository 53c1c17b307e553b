//! Struct definitions and implementations for [`Location`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Location`] is a named place on the map, such as a city or a
/// tourist destination. Locations are collected in a
/// [`Registry`](`super::registry::Registry`) which owns the canonical
/// spelling of each name.
///
/// Coordinates are wrapped in [`OrderedFloat`] so that a location can
/// be hashed and compared.
#[derive(Debug, PartialEq, Hash, Eq, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Canonical display name, unique within a registry.
    pub name: String,

    /// The latitude of the location in decimal degrees.
    pub latitude: OrderedFloat<f64>,

    /// The longitude of the location in decimal degrees.
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Creates a new location.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Location {
        Location {
            name: name.into(),
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Returns `true` if both coordinates are finite and within the
    /// valid latitude (-90..=90) and longitude (-180..=180) ranges.
    pub fn is_valid(&self) -> bool {
        let (lat, lon) = (self.latitude.into_inner(), self.longitude.into_inner());
        lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon)
    }
}

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(Location::new("Skardu", 35.2971, 75.6333).is_valid());
        assert!(Location::new("South Pole", -90.0, 180.0).is_valid());
        assert!(!Location::new("Nowhere", 91.0, 0.0).is_valid());
        assert!(!Location::new("Nowhere", 0.0, -180.5).is_valid());
        assert!(!Location::new("Nowhere", f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_serde_round_trip_keeps_name() {
        let location = Location::new("Hunza", 36.3167, 74.65);
        let json = serde_json::to_string(&location).unwrap();
        assert!(json.contains("\"name\":\"Hunza\""));
        let parsed: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, location);
    }
}
