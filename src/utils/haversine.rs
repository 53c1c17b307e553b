//! Great-circle distance between two points on the Earth's surface.
//!
//! Coordinates are not range-checked. Out-of-range angles produce a
//! mathematically defined but meaningless distance, and non-finite
//! input propagates as `NaN`. Use [`Location::is_valid`] when the
//! input comes from an untrusted source.

use crate::location::Location;

/// Mean radius of the Earth in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the haversine distance in kilometers between two
/// latitude/longitude pairs given in decimal degrees.
///
/// # Arguments
/// * `lat1`, `lon1` - The first coordinate.
/// * `lat2`, `lon2` - The second coordinate.
///
/// # Returns
/// A non-negative distance in kilometers.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // rounding can push `a` a hair above 1 for antipodal points; NaN
    // must fall through untouched
    let a = if a > 1.0 { 1.0 } else { a };
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Same as [`distance`], taking two [`Location`]s.
pub fn distance_between(from: &Location, to: &Location) -> f64 {
    distance(
        from.latitude.into_inner(),
        from.longitude.into_inner(),
        to.latitude.into_inner(),
        to.longitude.into_inner(),
    )
}
