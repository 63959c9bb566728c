//! Geographic primitives shared across the temperature tile workspace.
//!
//! - Locations, great-circle distance and the integer-degree lattice
//! - Web Mercator tile coordinates and their subdivision into pixel grids
//! - Geographic bounding boxes

pub mod bbox;
pub mod error;
pub mod location;
pub mod tile;

pub use bbox::BoundingBox;
pub use error::{GeoError, GeoResult};
pub use location::{great_circle_distance, CellPoint, GridLocation, Location, Observation};
pub use tile::{tile_to_location, SubTile, Tile, TileSet};
