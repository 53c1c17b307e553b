//! Generates random locations for fixture registries.

use rand::Rng;

use crate::location::Location;

/// Kilometers per degree of latitude.
const KM_PER_DEGREE: f64 = 111.32;

/// Generate `capacity` random locations within `radius_km` of `center`.
///
/// Names are `"{center.name}-{i}"`, so the result can be fed straight
/// into [`Registry::new`](`crate::registry::Registry::new`).
///
/// The offset is computed on a flat approximation of the Earth, which
/// is close enough for radii of a few hundred kilometers away from the
/// poles.
pub fn generate_locations_near(center: &Location, radius_km: f64, capacity: usize) -> Vec<Location> {
    let mut rng = rand::thread_rng();
    let latitude = center.latitude.into_inner();
    let longitude = center.longitude.into_inner();
    let km_per_degree_longitude = KM_PER_DEGREE * latitude.to_radians().cos();

    (0..capacity)
        .map(|i| {
            // sqrt keeps the points uniform over the disc
            let distance_km = radius_km * rng.gen::<f64>().sqrt();
            let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
            Location::new(
                format!("{}-{}", center.name, i),
                latitude + distance_km * bearing.cos() / KM_PER_DEGREE,
                longitude + distance_km * bearing.sin() / km_per_degree_longitude,
            )
        })
        .collect()
}
