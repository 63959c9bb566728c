//! Inverse distance weighting over scattered observations.
//!
//! Each observation contributes with weight `1 / d^p` where `d` is the
//! great-circle distance to the query point and `p = 2`. Observations
//! within [`EXACT_MATCH_RADIANS`] of the query are in-situ readings: when
//! any exist, their plain mean replaces the weighted estimate entirely.
//!
//! The reduction is expressed through [`IdwAccumulator`], whose `combine`
//! is associative and commutative, so observation sets can be folded in
//! any order or split across threads.

use crate::FieldSampler;
use geo_common::location::EXACT_MATCH_RADIANS;
use geo_common::{great_circle_distance, Location, Observation};
use rayon::prelude::*;

/// Power parameter of the inverse distance weighting.
pub const IDW_POWER: i32 = 2;

/// Partial result of an inverse distance weighted reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IdwAccumulator {
    /// No exact match seen yet: running `sum(w * v)` and `sum(w)`.
    Weighted { weighted_sum: f64, total_weight: f64 },
    /// At least one exact match: running sum and count of the matches only.
    Exact { sum: f64, count: usize },
}

impl Default for IdwAccumulator {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl IdwAccumulator {
    /// Identity element of [`IdwAccumulator::combine`].
    pub const EMPTY: Self = Self::Weighted {
        weighted_sum: 0.0,
        total_weight: 0.0,
    };

    /// Accumulator for a single observation at `distance` radians.
    pub fn from_sample(distance: f64, value: f64) -> Self {
        if distance < EXACT_MATCH_RADIANS {
            return Self::Exact {
                sum: value,
                count: 1,
            };
        }
        let weight = 1.0 / distance.powi(IDW_POWER);
        Self::Weighted {
            weighted_sum: weight * value,
            total_weight: weight,
        }
    }

    /// Merge two partial results. Exact matches absorb weighted terms.
    pub fn combine(self, other: Self) -> Self {
        match (self, other) {
            (
                Self::Weighted {
                    weighted_sum: s1,
                    total_weight: w1,
                },
                Self::Weighted {
                    weighted_sum: s2,
                    total_weight: w2,
                },
            ) => Self::Weighted {
                weighted_sum: s1 + s2,
                total_weight: w1 + w2,
            },
            (Self::Exact { sum: s1, count: c1 }, Self::Exact { sum: s2, count: c2 }) => {
                Self::Exact {
                    sum: s1 + s2,
                    count: c1 + c2,
                }
            }
            (exact @ Self::Exact { .. }, Self::Weighted { .. })
            | (Self::Weighted { .. }, exact @ Self::Exact { .. }) => exact,
        }
    }

    /// Final estimate. An empty reduction yields 0.
    pub fn result(self) -> f64 {
        match self {
            Self::Weighted {
                weighted_sum,
                total_weight,
            } => {
                if total_weight == 0.0 {
                    0.0
                } else {
                    weighted_sum / total_weight
                }
            }
            Self::Exact { sum, count } => sum / count as f64,
        }
    }
}

fn accumulate(observation: &Observation, location: &Location) -> IdwAccumulator {
    let distance = great_circle_distance(&observation.location, location);
    IdwAccumulator::from_sample(distance, observation.value)
}

/// Predict the value at `location` from scattered observations.
///
/// Returns 0 when there are no observations.
pub fn predict(observations: &[Observation], location: &Location) -> f64 {
    observations
        .iter()
        .map(|observation| accumulate(observation, location))
        .fold(IdwAccumulator::EMPTY, IdwAccumulator::combine)
        .result()
}

/// Same as [`predict`], reducing the observations on the rayon pool.
///
/// Worth it for large observation sets evaluated at few locations; the
/// result only differs from [`predict`] by floating point reassociation.
pub fn predict_parallel(observations: &[Observation], location: &Location) -> f64 {
    observations
        .par_iter()
        .map(|observation| accumulate(observation, location))
        .reduce(|| IdwAccumulator::EMPTY, IdwAccumulator::combine)
        .result()
}

/// A continuous field predicted directly from an observation set.
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    observations: Vec<Observation>,
}

impl Predictor {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn predict(&self, location: &Location) -> f64 {
        predict(&self.observations, location)
    }
}

impl FromIterator<Observation> for Predictor {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FieldSampler for Predictor {
    fn sample(&self, location: &Location) -> f64 {
        self.predict(location)
    }
}
