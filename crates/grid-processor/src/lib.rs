//! Spatial estimation over scattered temperature observations.
//!
//! This crate turns a set of point observations into a continuous field:
//!
//! - **Prediction**: inverse distance weighting over all observations
//! - **Lattice fields**: the prediction discretized on a one-degree grid,
//!   memoized per lattice point, averaged across periods or compared to
//!   normals
//! - **Bilinear sampling**: a continuous field recovered from the lattice
//!
//! # Architecture
//!
//! ```text
//! observations
//!      │
//!      ├─► Predictor ───────────────────────────┐
//!      │                                        │
//!      └─► build_grid / average / deviation     │
//!               │                               │
//!               ▼                               ▼
//!          LatticeField ─► BilinearSampler ─► FieldSampler ─► renderer
//! ```
//!
//! # Example
//!
//! ```
//! use geo_common::{Location, Observation};
//! use grid_processor::{build_grid, predict, BilinearSampler, FieldSampler};
//!
//! let observations = vec![
//!     Observation::new(Location::new(10.0, 10.0), 20.0),
//!     Observation::new(Location::new(20.0, 20.0), 10.0),
//! ];
//!
//! let direct = predict(&observations, &Location::new(10.0, 10.0));
//! assert_eq!(direct, 20.0);
//!
//! let sampler = BilinearSampler::new(build_grid(observations));
//! assert_eq!(sampler.sample(&Location::new(10.0, 10.0)), 20.0);
//! ```

pub mod aggregate;
pub mod cache;
pub mod field;
pub mod interpolation;
pub mod predict;
pub mod types;

// Re-export commonly used types at crate root
pub use aggregate::average_by_location;
pub use cache::LatticeCache;
pub use field::{average, build_grid, deviation, from_fn, AverageGrid, DeviationGrid, LatticeField, MemoGrid};
pub use interpolation::{bilinear, sample_bilinear, BilinearSampler};
pub use predict::{predict, predict_parallel, IdwAccumulator, Predictor};
pub use types::{CacheStats, FieldSampler};
