//! Reference inputs with known answers.

use geo_common::{Location, Observation};

/// Two stations used throughout the prediction tests.
///
/// Known IDW (p = 2) results: 14.94346697 at (15, 15) and 16.90043206 at
/// (-10, -10).
pub fn two_stations() -> Vec<Observation> {
    vec![
        Observation::new(Location::new(10.0, 10.0), 20.0),
        Observation::new(Location::new(20.0, 20.0), 10.0),
    ]
}

pub const TWO_STATIONS_AT_15_15: f64 = 14.94346697;
pub const TWO_STATIONS_AT_MINUS_10: f64 = 16.90043206;

/// Temperature color stops as `(key, (r, g, b))`, deliberately unsorted.
///
/// Blue sits at both 0 and -15, so the midpoint between 0 and 12 (yellow)
/// is a neutral gray (128, 128, 128).
pub const TEMPERATURE_STOPS: [(f64, (i32, i32, i32)); 8] = [
    (60.0, (255, 255, 255)),
    (32.0, (255, 0, 0)),
    (12.0, (255, 255, 0)),
    (0.0, (0, 0, 255)),
    (-15.0, (0, 0, 255)),
    (-27.0, (255, 0, 255)),
    (-50.0, (33, 0, 107)),
    (-60.0, (0, 0, 5)),
];

/// The same station reported twice in one period plus a second station.
pub fn repeated_station() -> Vec<Observation> {
    vec![
        Observation::new(Location::new(10.0, 20.0), 10.0),
        Observation::new(Location::new(10.0, 20.0), 15.0),
        Observation::new(Location::new(30.0, 30.0), 20.0),
    ]
}
