//! Cache implementations for grid processing.

mod lattice_cache;

pub use lattice_cache::LatticeCache;
