//! Tests for inverse distance weighted prediction.

use geo_common::{Location, Observation};
use grid_processor::{predict, predict_parallel, IdwAccumulator, Predictor};
use test_utils::{assert_approx_eq, fixtures, scattered_stations};

// ============================================================================
// Reference values
// ============================================================================

#[test]
fn test_two_station_reference_values() {
    let observations = fixtures::two_stations();

    let at_15 = predict(&observations, &Location::new(15.0, 15.0));
    assert_approx_eq!(at_15, fixtures::TWO_STATIONS_AT_15_15, 1e-8);

    let at_minus_10 = predict(&observations, &Location::new(-10.0, -10.0));
    assert_approx_eq!(at_minus_10, fixtures::TWO_STATIONS_AT_MINUS_10, 1e-8);
}

#[test]
fn test_prediction_at_each_station_is_exact() {
    let observations = scattered_stations(200, 11);
    for observation in observations.iter().take(20) {
        let value = predict(&observations, &observation.location);
        // Scattered stations never coincide, so the station's own value wins
        assert_eq!(value, observation.value);
    }
}

#[test]
fn test_empty_observations() {
    assert_eq!(predict(&[], &Location::new(45.0, 45.0)), 0.0);
    assert_eq!(predict_parallel(&[], &Location::new(45.0, 45.0)), 0.0);
}

#[test]
fn test_single_observation_everywhere() {
    let observations = vec![Observation::new(Location::new(0.0, 0.0), 7.5)];
    for &(lat, lon) in &[(10.0, 10.0), (-60.0, 170.0), (0.0, 180.0)] {
        assert_approx_eq!(predict(&observations, &Location::new(lat, lon)), 7.5, 1e-12);
    }
}

#[test]
fn test_prediction_within_observation_range() {
    let observations = scattered_stations(100, 3);
    let min = observations.iter().map(|o| o.value).fold(f64::INFINITY, f64::min);
    let max = observations.iter().map(|o| o.value).fold(f64::NEG_INFINITY, f64::max);

    for &(lat, lon) in &[(12.3, 45.6), (-77.0, -12.0), (89.0, 0.0)] {
        let value = predict(&observations, &Location::new(lat, lon));
        assert!(value >= min - 1e-9 && value <= max + 1e-9);
    }
}

// ============================================================================
// Exact match policy
// ============================================================================

#[test]
fn test_exact_matches_ignore_neighbors() {
    let mut observations = fixtures::repeated_station();
    observations.push(Observation::new(Location::new(10.0001, 20.0), 1000.0));

    let value = predict(&observations, &Location::new(10.0, 20.0));
    assert_eq!(value, 12.5);
}

#[test]
fn test_antipodal_observation_contributes() {
    let query = Location::new(10.0, 10.5);
    let observations = vec![
        Observation::new(Location::new(10.0, 10.0), 0.0),
        Observation::new(Location::new(-10.0, -169.5), 10.0),
    ];
    // The second station sits exactly pi away from the query and still counts
    let value = predict(&observations, &query);
    assert!(value > 0.0 && value < 1e-3);

    let at_station = predict(&observations, &Location::new(10.0, 10.0));
    assert_eq!(at_station, 0.0);
}

// ============================================================================
// Parallel reduction
// ============================================================================

#[test]
fn test_parallel_matches_sequential() {
    let observations = scattered_stations(5_000, 42);
    for &(lat, lon) in &[(0.5, 0.5), (33.3, -120.1), (-45.0, 170.0)] {
        let location = Location::new(lat, lon);
        let sequential = predict(&observations, &location);
        let parallel = predict_parallel(&observations, &location);
        assert_approx_eq!(sequential, parallel, 1e-9);
    }
}

#[test]
fn test_chunked_combine_is_order_independent() {
    let observations = scattered_stations(64, 5);
    let location = Location::new(12.0, 34.0);

    let accumulate = |chunk: &[Observation]| {
        chunk
            .iter()
            .map(|o| {
                IdwAccumulator::from_sample(
                    geo_common::great_circle_distance(&o.location, &location),
                    o.value,
                )
            })
            .fold(IdwAccumulator::EMPTY, IdwAccumulator::combine)
    };

    let (left, right) = observations.split_at(20);
    let forward = accumulate(left).combine(accumulate(right)).result();
    let backward = accumulate(right).combine(accumulate(left)).result();

    assert_approx_eq!(forward, predict(&observations, &location), 1e-9);
    assert_approx_eq!(forward, backward, 1e-12);
}

#[test]
fn test_predictor_keeps_observations() {
    let predictor = Predictor::new(fixtures::two_stations());
    assert_eq!(predictor.observations().len(), 2);
    assert_approx_eq!(
        predictor.predict(&Location::new(15.0, 15.0)),
        fixtures::TWO_STATIONS_AT_15_15,
        1e-8
    );
}
