//! Web Mercator (slippy map) tiles and their subdivision into pixel grids.

use crate::{BoundingBox, GeoError, GeoResult, Location};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Deepest zoom level of any tile, sub-tiles included.
///
/// A [`TileSet`] reaches `zoom + delta_zoom`, so a tile rendered at the
/// usual 8-level subdivision can be at most zoom 22.
pub const MAX_ZOOM: u32 = 30;

/// A tile coordinate in the standard z/x/y scheme.
///
/// Invariant: `x, y < 2^zoom`. [`Tile::new`] trusts the caller,
/// [`Tile::try_new`] checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Column
    pub x: u32,
    /// Row, counted from the north
    pub y: u32,
    /// Zoom level
    pub zoom: u32,
}

impl Tile {
    pub fn new(x: u32, y: u32, zoom: u32) -> Self {
        Self { x, y, zoom }
    }

    /// Create a tile, rejecting indices outside the zoom level's matrix.
    pub fn try_new(x: u32, y: u32, zoom: u32) -> GeoResult<Self> {
        if zoom > MAX_ZOOM {
            return Err(GeoError::InvalidZoom(zoom));
        }
        let limit = 1u64 << zoom;
        if x as u64 >= limit || y as u64 >= limit {
            return Err(GeoError::InvalidTile { x, y, zoom, limit });
        }
        Ok(Self { x, y, zoom })
    }

    /// Number of tiles along each axis at this tile's zoom level.
    pub fn matrix_size(&self) -> f64 {
        (1u64 << self.zoom) as f64
    }

    /// Top-left (north-west) corner of the tile.
    pub fn location(&self) -> Location {
        tile_to_location(self)
    }

    /// Generate a cache key string.
    pub fn cache_key(&self) -> String {
        format!("{}/{}/{}", self.zoom, self.x, self.y)
    }

    /// Get the parent tile (zoom - 1).
    pub fn parent(&self) -> Option<Tile> {
        if self.zoom == 0 {
            return None;
        }
        Some(Tile {
            x: self.x / 2,
            y: self.y / 2,
            zoom: self.zoom - 1,
        })
    }

    /// Get the four children tiles (zoom + 1), in row-major order.
    pub fn children(&self) -> [Tile; 4] {
        let x = self.x * 2;
        let y = self.y * 2;
        let zoom = self.zoom + 1;
        [
            Tile { x, y, zoom },
            Tile { x: x + 1, y, zoom },
            Tile { x, y: y + 1, zoom },
            Tile {
                x: x + 1,
                y: y + 1,
                zoom,
            },
        ]
    }

    /// The tile containing a location at the given zoom level.
    pub fn from_location(location: &Location, zoom: u32) -> Tile {
        let n = (1u64 << zoom) as f64;
        let max_index = (1u64 << zoom) - 1;

        let x = ((location.lon + 180.0) / 360.0 * n).floor().max(0.0) as u64;
        let lat_rad = location.lat.to_radians();
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor().max(0.0) as u64;

        Tile {
            x: x.min(max_index) as u32,
            y: y.min(max_index) as u32,
            zoom,
        }
    }

    /// Geographic extent of the tile in degrees.
    pub fn bounds(&self) -> BoundingBox {
        let north_west = self.location();
        let south_east = Tile {
            x: self.x + 1,
            y: self.y + 1,
            zoom: self.zoom,
        }
        .location();

        BoundingBox::new(north_west.lon, south_east.lat, south_east.lon, north_west.lat)
    }
}

/// Convert a tile coordinate to the location of its top-left corner.
///
/// Inverse Web Mercator: longitude is linear in x, latitude is
/// `atan(sinh(pi * (1 - 2y / 2^zoom)))`.
pub fn tile_to_location(tile: &Tile) -> Location {
    let n = tile.matrix_size();

    let lon = tile.x as f64 / n * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * tile.y as f64 / n))
        .sinh()
        .atan()
        .to_degrees();

    Location::new(lat, lon)
}

/// A tile split into `2^delta_zoom x 2^delta_zoom` sub-tiles, one per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSet {
    pub tile: Tile,
    pub delta_zoom: u32,
}

/// One sub-tile of a [`TileSet`] together with the pixel it renders to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubTile {
    /// The tile at `zoom + delta_zoom`
    pub tile: Tile,
    /// Pixel column within the parent tile
    pub px: u32,
    /// Pixel row within the parent tile
    pub py: u32,
    /// Top-left corner of the sub-tile
    pub location: Location,
}

impl TileSet {
    /// Create a tile set without checks.
    ///
    /// `tile.zoom + delta_zoom` must not exceed [`MAX_ZOOM`]; use
    /// [`TileSet::try_new`] for untrusted input.
    pub fn new(tile: Tile, delta_zoom: u32) -> Self {
        Self { tile, delta_zoom }
    }

    /// Create a tile set whose sub-tiles stay within [`MAX_ZOOM`].
    pub fn try_new(tile: Tile, delta_zoom: u32) -> GeoResult<Self> {
        let depth = tile.zoom.saturating_add(delta_zoom);
        if depth > MAX_ZOOM {
            return Err(GeoError::InvalidZoom(depth));
        }
        Ok(Self { tile, delta_zoom })
    }

    /// Pixels along each axis (`2^delta_zoom`).
    pub fn size(&self) -> u32 {
        1u32 << self.delta_zoom
    }

    /// Total number of sub-tiles.
    pub fn pixel_count(&self) -> usize {
        let size = self.size() as usize;
        size * size
    }

    /// The sub-tile rendered to pixel `(px, py)`.
    pub fn sub_tile(&self, px: u32, py: u32) -> SubTile {
        let size = self.size();
        let tile = Tile {
            x: self.tile.x * size + px,
            y: self.tile.y * size + py,
            zoom: self.tile.zoom + self.delta_zoom,
        };
        SubTile {
            tile,
            px,
            py,
            location: tile.location(),
        }
    }

    /// All sub-tiles in row-major order: index `py * size + px`.
    pub fn subdivide(&self) -> Vec<SubTile> {
        let size = self.size();
        let mut sub_tiles = Vec::with_capacity(self.pixel_count());
        for py in 0..size {
            for px in 0..size {
                sub_tiles.push(self.sub_tile(px, py));
            }
        }
        sub_tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_tile_location() {
        let loc = Tile::new(0, 0, 0).location();
        assert_eq!(loc.lon, -180.0);
        assert!((loc.lat - 85.051_128_779_806_59).abs() < 1e-9);
    }

    #[test]
    fn test_center_tile_location() {
        let loc = Tile::new(1, 1, 1).location();
        assert_eq!(loc.lon, 0.0);
        assert!(loc.lat.abs() < 1e-12);
    }

    #[test]
    fn test_parent_children() {
        let tile = Tile::new(10, 15, 5);
        let parent = tile.parent().unwrap();
        assert_eq!(parent, Tile::new(5, 7, 4));

        let children = parent.children();
        assert!(children.contains(&tile));
        assert!(Tile::new(0, 0, 0).parent().is_none());
    }

    #[test]
    fn test_from_location_round_trip() {
        let tile = Tile::new(301, 384, 10);
        let corner = tile.location();
        let inside = Location::new(corner.lat - 0.01, corner.lon + 0.01);
        assert_eq!(Tile::from_location(&inside, 10), tile);
    }

    #[test]
    fn test_try_new() {
        assert!(Tile::try_new(1, 1, 1).is_ok());
        assert_eq!(
            Tile::try_new(2, 0, 1),
            Err(GeoError::InvalidTile {
                x: 2,
                y: 0,
                zoom: 1,
                limit: 2
            })
        );
        assert_eq!(Tile::try_new(0, 0, 31), Err(GeoError::InvalidZoom(31)));
    }

    #[test]
    fn test_tile_set_depth_limit() {
        assert!(TileSet::try_new(Tile::new(0, 0, 22), 8).is_ok());
        assert_eq!(
            TileSet::try_new(Tile::new(0, 0, 25), 8),
            Err(GeoError::InvalidZoom(33))
        );
        assert_eq!(
            TileSet::try_new(Tile::new(0, 0, 1), u32::MAX),
            Err(GeoError::InvalidZoom(u32::MAX))
        );
    }

    #[test]
    fn test_subdivide_order() {
        let set = TileSet::new(Tile::new(1, 2, 2), 2);
        let subs = set.subdivide();
        assert_eq!(subs.len(), 16);
        for (index, sub) in subs.iter().enumerate() {
            assert_eq!(index, (sub.py * 4 + sub.px) as usize);
            assert_eq!(sub.tile.zoom, 4);
            assert_eq!(sub.tile.x, 4 + sub.px);
            assert_eq!(sub.tile.y, 8 + sub.py);
        }
    }
}
