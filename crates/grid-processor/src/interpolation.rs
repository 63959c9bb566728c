//! Bilinear interpolation over a lattice field.

use geo_common::{CellPoint, GridLocation, Location};

use crate::field::LatticeField;
use crate::types::FieldSampler;

/// Bilinear interpolation inside one cell.
///
/// `d00` is the top-left corner, `d01` bottom-left, `d10` top-right and
/// `d11` bottom-right; `point.y` grows southwards.
pub fn bilinear(point: CellPoint, d00: f64, d01: f64, d10: f64, d11: f64) -> f64 {
    let CellPoint { x, y } = point;
    d00 * (1.0 - x) * (1.0 - y) + d01 * (1.0 - x) * y + d10 * x * (1.0 - y) + d11 * x * y
}

// Longitude 180 is the lattice column -180
fn wrap_lon(lon: i32) -> i32 {
    if lon > GridLocation::MAX_LON {
        lon - 360
    } else {
        lon
    }
}

/// Sample a lattice field at an arbitrary location.
///
/// Uses the four lattice points around `location`. On an integer
/// coordinate the corresponding corners coincide and the lattice value is
/// returned exactly. East of longitude 179 the eastern corners wrap to
/// -180; south of latitude -89 the southern corners are read at -90.
pub fn sample_bilinear<G: LatticeField + ?Sized>(grid: &G, location: &Location) -> f64 {
    let lat0 = location.lat.floor() as i32;
    let lat1 = location.lat.ceil() as i32;
    let lon0 = location.lon.floor() as i32;
    let lon1 = location.lon.ceil() as i32;

    let point = CellPoint::new(location.lon - lon0 as f64, lat1 as f64 - location.lat);
    let (lon0, lon1) = (wrap_lon(lon0), wrap_lon(lon1));

    let d00 = grid.value_at(GridLocation::new(lat1, lon0));
    let d01 = grid.value_at(GridLocation::new(lat0, lon0));
    let d10 = grid.value_at(GridLocation::new(lat1, lon1));
    let d11 = grid.value_at(GridLocation::new(lat0, lon1));

    bilinear(point, d00, d01, d10, d11)
}

/// Continuous field recovered from a lattice field by bilinear sampling.
#[derive(Debug, Clone)]
pub struct BilinearSampler<G> {
    grid: G,
}

impl<G: LatticeField> BilinearSampler<G> {
    pub fn new(grid: G) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn into_inner(self) -> G {
        self.grid
    }
}

impl<G: LatticeField> FieldSampler for BilinearSampler<G> {
    fn sample(&self, location: &Location) -> f64 {
        sample_bilinear(&self.grid, location)
    }
}
