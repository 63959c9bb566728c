//! Scalar fields on the one-degree lattice.
//!
//! A [`LatticeField`] is a pure function from [`GridLocation`] to a value.
//! [`MemoGrid`] evaluates the IDW prediction lazily and caches every
//! lattice point it has seen; [`AverageGrid`] and [`DeviationGrid`] build
//! on it for multi-period normals and anomalies.

use std::sync::Arc;
use std::time::Instant;

use geo_common::{GridLocation, Observation};
use rayon::prelude::*;
use tracing::debug;

use crate::cache::LatticeCache;
use crate::predict::predict;
use crate::types::CacheStats;

/// A scalar field defined on integer lattice points.
///
/// Bilinear sampling keeps longitudes on the lattice but may ask for
/// latitude -90 when sampling south of -89, one row outside
/// [`GridLocation::is_valid`]. Table-backed implementations should answer
/// for that row too.
pub trait LatticeField: Sync {
    fn value_at(&self, location: GridLocation) -> f64;
}

impl<T: LatticeField + ?Sized> LatticeField for &T {
    fn value_at(&self, location: GridLocation) -> f64 {
        (**self).value_at(location)
    }
}

impl<T: LatticeField + ?Sized + Send> LatticeField for Arc<T> {
    fn value_at(&self, location: GridLocation) -> f64 {
        (**self).value_at(location)
    }
}

impl<T: LatticeField + ?Sized> LatticeField for Box<T> {
    fn value_at(&self, location: GridLocation) -> f64 {
        (**self).value_at(location)
    }
}

/// Lattice field backed by a plain function, e.g. precomputed normals.
#[derive(Debug, Clone, Copy)]
pub struct FnField<F>(pub F);

impl<F> LatticeField for FnField<F>
where
    F: Fn(GridLocation) -> f64 + Sync,
{
    fn value_at(&self, location: GridLocation) -> f64 {
        (self.0)(location)
    }
}

/// Wrap a function as a [`LatticeField`].
pub fn from_fn<F>(f: F) -> FnField<F>
where
    F: Fn(GridLocation) -> f64 + Sync,
{
    FnField(f)
}

/// IDW prediction on the lattice, computed on first access and cached.
///
/// Each grid owns its cache; nothing is shared between instances.
#[derive(Debug)]
pub struct MemoGrid {
    observations: Vec<Observation>,
    cache: LatticeCache,
}

impl MemoGrid {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self {
            observations,
            cache: LatticeCache::with_global_capacity(),
        }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Evaluate every point of the global lattice on the rayon pool.
    pub fn warm(&self) {
        let start = Instant::now();
        let points: Vec<GridLocation> = GridLocation::all().collect();
        points.par_iter().for_each(|&point| {
            self.value_at(point);
        });
        debug!(
            observations = self.observations.len(),
            entries = self.cache.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Warmed lattice grid"
        );
    }
}

impl LatticeField for MemoGrid {
    fn value_at(&self, location: GridLocation) -> f64 {
        self.cache.get_or_compute(location, || {
            predict(&self.observations, &location.location())
        })
    }
}

/// Build a memoized lattice field from one period's observations.
pub fn build_grid(observations: Vec<Observation>) -> MemoGrid {
    debug!(observations = observations.len(), "Building lattice grid");
    MemoGrid::new(observations)
}

/// Per-point arithmetic mean of several periods' lattice fields.
#[derive(Debug)]
pub struct AverageGrid {
    grids: Vec<MemoGrid>,
}

impl AverageGrid {
    pub fn grids(&self) -> &[MemoGrid] {
        &self.grids
    }

    /// Evaluate every member grid over the whole lattice.
    pub fn warm(&self) {
        self.grids.iter().for_each(MemoGrid::warm);
    }
}

impl LatticeField for AverageGrid {
    fn value_at(&self, location: GridLocation) -> f64 {
        if self.grids.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.grids.iter().map(|grid| grid.value_at(location)).sum();
        sum / self.grids.len() as f64
    }
}

/// Average the lattice fields of several periods (e.g. years of normals).
///
/// An empty list of periods yields a field that is 0 everywhere.
pub fn average<I>(periods: I) -> AverageGrid
where
    I: IntoIterator<Item = Vec<Observation>>,
{
    let grids: Vec<MemoGrid> = periods.into_iter().map(build_grid).collect();
    debug!(periods = grids.len(), "Averaging lattice grids");
    AverageGrid { grids }
}

/// Difference between one period's lattice field and a normals field.
#[derive(Debug)]
pub struct DeviationGrid<N> {
    grid: MemoGrid,
    normals: N,
}

impl<N: LatticeField> DeviationGrid<N> {
    pub fn grid(&self) -> &MemoGrid {
        &self.grid
    }

    pub fn normals(&self) -> &N {
        &self.normals
    }
}

impl<N: LatticeField> LatticeField for DeviationGrid<N> {
    fn value_at(&self, location: GridLocation) -> f64 {
        self.grid.value_at(location) - self.normals.value_at(location)
    }
}

/// Build the deviation of `observations` from `normals` on the lattice.
pub fn deviation<N: LatticeField>(observations: Vec<Observation>, normals: N) -> DeviationGrid<N> {
    DeviationGrid {
        grid: build_grid(observations),
        normals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_common::Location;

    fn obs(lat: f64, lon: f64, value: f64) -> Observation {
        Observation::new(Location::new(lat, lon), value)
    }

    #[test]
    fn test_grid_matches_predict() {
        let observations = vec![obs(10.0, 10.0, 20.0), obs(20.0, 20.0, 10.0)];
        let grid = build_grid(observations.clone());
        let point = GridLocation::new(15, 15);
        assert_eq!(
            grid.value_at(point),
            predict(&observations, &Location::new(15.0, 15.0))
        );
    }

    #[test]
    fn test_grid_memoizes() {
        let grid = build_grid(vec![obs(0.0, 0.0, 1.0)]);
        let point = GridLocation::new(5, 5);
        let first = grid.value_at(point);
        let second = grid.value_at(point);
        assert_eq!(first, second);
        let stats = grid.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_average_of_exact_points() {
        let avg = average(vec![
            vec![obs(10.0, 20.0, 10.0)],
            vec![obs(10.0, 20.0, 15.0)],
        ]);
        assert_eq!(avg.value_at(GridLocation::new(10, 20)), 12.5);
        assert_eq!(avg.grids().len(), 2);
    }

    #[test]
    fn test_average_of_nothing_is_zero() {
        let avg = average(Vec::<Vec<Observation>>::new());
        assert_eq!(avg.value_at(GridLocation::new(0, 0)), 0.0);
    }

    #[test]
    fn test_deviation_against_function() {
        let normals = from_fn(|loc: GridLocation| loc.lat as f64);
        let dev = deviation(vec![obs(30.0, 30.0, 25.0)], normals);
        assert_eq!(dev.value_at(GridLocation::new(30, 30)), -5.0);
    }

    #[test]
    fn test_deviation_against_average() {
        let normals = average(vec![vec![obs(0.0, 0.0, 10.0)], vec![obs(0.0, 0.0, 20.0)]]);
        let dev = deviation(vec![obs(0.0, 0.0, 18.0)], &normals);
        assert_eq!(dev.value_at(GridLocation::new(0, 0)), 3.0);
    }
}
