//! Tile and globe rendering.
//!
//! Every pixel is an independent sample of a [`FieldSampler`] mapped
//! through a [`ColorScale`], so pixels are evaluated on the rayon pool.

use std::time::Instant;

use geo_common::{Location, Tile, TileSet};
use grid_processor::FieldSampler;
use rayon::prelude::*;
use tracing::debug;

use crate::color::argb_to_rgba;
use crate::{ColorScale, RenderConfig, RenderError};

/// Row-major ARGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels in row-major order, `y * width + x`.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    /// Convert to RGBA bytes, the layout image encoders expect.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&pixel| argb_to_rgba(pixel))
            .collect()
    }
}

/// Render a 256x256 tile with the default configuration.
pub fn render_tile<S>(
    tile: &Tile,
    sampler: &S,
    scale: &ColorScale,
) -> Result<PixelBuffer, RenderError>
where
    S: FieldSampler + ?Sized,
{
    render_tile_with(tile, sampler, scale, &RenderConfig::default())
}

/// Render a tile subdivided `config.tile_delta_zoom` times.
///
/// Each pixel samples the field at the top-left corner of its sub-tile.
/// Fails if the configuration is invalid or the sub-tiles would be deeper
/// than [`geo_common::tile::MAX_ZOOM`].
pub fn render_tile_with<S>(
    tile: &Tile,
    sampler: &S,
    scale: &ColorScale,
    config: &RenderConfig,
) -> Result<PixelBuffer, RenderError>
where
    S: FieldSampler + ?Sized,
{
    config.validate()?;
    let tile_set = TileSet::try_new(*tile, config.tile_delta_zoom)?;

    let start = Instant::now();
    let size = tile_set.size();
    let alpha = config.tile_alpha;

    let pixels: Vec<u32> = tile_set
        .subdivide()
        .into_par_iter()
        .map(|sub_tile| {
            let value = sampler.sample(&sub_tile.location);
            scale.color_at(value).to_argb(alpha)
        })
        .collect();

    debug!(
        tile = %tile.cache_key(),
        size = size,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Rendered tile"
    );

    Ok(PixelBuffer::from_pixels(size, size, pixels))
}

/// Location sampled by globe pixel `(x, y)` of a `width x height` image.
pub fn globe_location(x: u32, y: u32, width: u32, height: u32) -> Location {
    Location::new(
        90.0 - y as f64 * 180.0 / height as f64,
        x as f64 * 360.0 / width as f64 - 180.0,
    )
}

/// Render the whole globe in equirectangular projection.
pub fn render_globe<S>(
    sampler: &S,
    scale: &ColorScale,
    width: u32,
    height: u32,
    alpha: u8,
) -> Result<PixelBuffer, RenderError>
where
    S: FieldSampler + ?Sized,
{
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidDimensions { width, height });
    }

    let start = Instant::now();
    let mut pixels = vec![0u32; width as usize * height as usize];

    pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let location = globe_location(x as u32, y as u32, width, height);
                *pixel = scale.color_at(sampler.sample(&location)).to_argb(alpha);
            }
        });

    debug!(
        width = width,
        height = height,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Rendered globe"
    );

    Ok(PixelBuffer::from_pixels(width, height, pixels))
}

/// Render the whole globe with the alpha from `config.globe_alpha`.
pub fn render_globe_with<S>(
    sampler: &S,
    scale: &ColorScale,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Result<PixelBuffer, RenderError>
where
    S: FieldSampler + ?Sized,
{
    render_globe(sampler, scale, width, height, config.globe_alpha)
}
