//! The catalog of known places and free-text name resolution.
//!
//! A [`Registry`] is built once and passed by reference to the
//! [`Router`](`crate::router::engine::Router`) and the
//! [`RoutePlanner`](`crate::planner::RoutePlanner`). Tests can build
//! small fixture registries instead of using the built-in catalog.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::error::{Result, RouteError};
use crate::location::Location;

/// Built-in catalog: `(name, latitude, longitude)`.
///
/// The capital and the largest cities come first, so that ambiguous
/// fragments resolve to the bigger place.
const PAKISTAN_LOCATIONS: &[(&str, f64, f64)] = &[
    ("Islamabad", 33.6844, 73.0479),
    ("Karachi", 24.8607, 67.0011),
    ("Lahore", 31.5204, 74.3587),
    ("Faisalabad", 31.4504, 73.1350),
    ("Rawalpindi", 33.5651, 73.0169),
    ("Peshawar", 34.0151, 71.5249),
    ("Multan", 30.1575, 71.5249),
    ("Hyderabad", 25.3960, 68.3578),
    ("Quetta", 30.1798, 66.9750),
    ("Sukkur", 27.7052, 68.8574),
    ("Bahawalpur", 29.3544, 71.6911),
    ("Gwadar", 25.1264, 62.3225),
    ("Murree", 33.9070, 73.3943),
    ("Naran", 34.9088, 73.6508),
    ("Swat", 35.2227, 72.4258),
    ("Chitral", 35.8518, 71.7864),
    ("Gilgit", 35.9208, 74.3089),
    ("Hunza", 36.3167, 74.6500),
    ("Skardu", 35.2971, 75.6333),
    ("Fairy Meadows", 35.3850, 74.5780),
    ("Neelum Valley", 34.5857, 73.9076),
];

static PAKISTAN: Lazy<Registry> = Lazy::new(|| Registry {
    locations: PAKISTAN_LOCATIONS
        .iter()
        .map(|&(name, latitude, longitude)| Location::new(name, latitude, longitude))
        .collect(),
});

/// The one case-folding rule used for every name comparison.
fn fold_case(name: &str) -> String {
    name.to_lowercase()
}

/// An immutable, ordered collection of [`Location`]s.
///
/// Iteration order is insertion order. Substring resolution returns
/// the first match in this order, so reordering a registry can change
/// which entry an ambiguous fragment resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    locations: Vec<Location>,
}

impl Registry {
    /// Creates a registry from the given locations.
    ///
    /// # Errors
    /// * [`RouteError::BlankLocationName`] if a name is empty or only
    ///   whitespace. Such a name would be a substring of every input.
    /// * [`RouteError::DuplicateLocation`] if two locations share a
    ///   name, ignoring case.
    pub fn new(locations: Vec<Location>) -> Result<Registry> {
        let mut seen = HashSet::new();
        for location in &locations {
            if location.name.trim().is_empty() {
                return Err(RouteError::BlankLocationName {
                    name: location.name.clone(),
                });
            }
            if !seen.insert(fold_case(&location.name)) {
                return Err(RouteError::DuplicateLocation {
                    name: location.name.clone(),
                });
            }
        }
        debug!("Registry created with {} locations", locations.len());
        Ok(Registry { locations })
    }

    /// The built-in catalog of Pakistani cities and destinations.
    pub fn pakistan() -> &'static Registry {
        &PAKISTAN
    }

    /// Looks up a location by its canonical name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations
            .iter()
            .find(|location| fold_case(&location.name) == fold_case(name))
    }

    /// Resolves free-text input to a registry entry.
    ///
    /// The input is trimmed and case-folded, then matched exactly.
    /// Failing that, the first entry whose name contains the input, or
    /// is contained in it, wins. Empty input never resolves. There is
    /// no typo tolerance.
    pub fn resolve(&self, input: &str) -> Option<&Location> {
        let needle = fold_case(input.trim());
        if needle.is_empty() {
            return None;
        }

        if let Some(location) = self
            .locations
            .iter()
            .find(|location| fold_case(&location.name) == needle)
        {
            return Some(location);
        }

        let found = self.locations.iter().find(|location| {
            let key = fold_case(&location.name);
            key.contains(&needle) || needle.contains(&key)
        });
        if let Some(location) = found {
            debug!("Resolved {:?} to {} by substring", input, location.name);
        }
        found
    }

    /// Like [`Registry::resolve`], but reports a miss as
    /// [`RouteError::LocationNotFound`].
    pub fn resolve_or_err(&self, input: &str) -> Result<&Location> {
        self.resolve(input).ok_or_else(|| {
            warn!("Location not recognized: {:?}", input);
            RouteError::LocationNotFound {
                input: input.to_string(),
            }
        })
    }

    /// All locations in registry order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Iterates over the locations in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the registry holds no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
