//! Synthetic observation generators.
//!
//! These produce deterministic, weather-like station layouts so tests and
//! benches do not depend on external data.

use geo_common::{Location, Observation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Idealized surface temperature in Celsius: warm equator, cold poles.
pub fn zonal_temperature(lat: f64) -> f64 {
    30.0 - 0.6 * lat.abs()
}

/// Stations on a regular lat/lon mesh with zonal temperatures.
///
/// `step` is the mesh spacing in degrees. Stations cover
/// [-80, 80] x [-180, 180).
pub fn mesh_stations(step: f64) -> Vec<Observation> {
    let mut observations = Vec::new();
    let mut lat = -80.0;
    while lat <= 80.0 {
        let mut lon = -180.0;
        while lon < 180.0 {
            observations.push(Observation::new(
                Location::new(lat, lon),
                zonal_temperature(lat),
            ));
            lon += step;
        }
        lat += step;
    }
    observations
}

/// Pseudo-random stations from a fixed seed, reproducible across runs.
pub fn scattered_stations(count: usize, seed: u64) -> Vec<Observation> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let lat: f64 = rng.gen_range(-90.0..=90.0);
            let lon: f64 = rng.gen_range(-180.0..180.0);
            let noise: f64 = rng.gen_range(-2.0..2.0);
            Observation::new(Location::new(lat, lon), zonal_temperature(lat) + noise)
        })
        .collect()
}

/// Shift every observation by a constant anomaly.
pub fn with_anomaly(observations: &[Observation], anomaly: f64) -> Vec<Observation> {
    observations
        .iter()
        .map(|o| Observation::new(o.location, o.value + anomaly))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_stations_count() {
        let stations = mesh_stations(40.0);
        // 5 latitudes (-80..=80) x 9 longitudes (-180..180)
        assert_eq!(stations.len(), 45);
    }

    #[test]
    fn test_scattered_stations_are_reproducible() {
        let a = scattered_stations(50, 7);
        let b = scattered_stations(50, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|o| (-90.0..=90.0).contains(&o.location.lat)));
        assert!(a.iter().all(|o| (-180.0..180.0).contains(&o.location.lon)));
        assert_ne!(a, scattered_stations(50, 8));
    }
}
