use crate::curve::params::LissajousParams;
use crate::curve::sampler::CurveSampler;
use crate::foundation::core::Canvas;
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::raster::grid::IntensityGrid;
use crate::raster::palette::Palette;

/// One palette-indexed frame. Pixels are row-major, `width × height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Palette index per pixel.
    pub indices: Vec<u8>,
}

impl IndexedFrame {
    /// Palette index at `(x, y)`, or `None` outside the frame.
    pub fn index_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.indices
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Expand to packed RGB8 using `palette`.
    pub fn to_rgb8(&self, palette: &Palette) -> LissajousResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.indices.len() * 3);
        for &i in &self.indices {
            let c = palette.get(i).ok_or_else(|| {
                LissajousError::encode(format!(
                    "palette index {i} out of range for {}-color palette",
                    palette.len()
                ))
            })?;
            out.extend_from_slice(&[c.r, c.g, c.b]);
        }
        Ok(out)
    }
}

/// Scale applied to unit-square samples for a `2·size` grid; leaves a two-pixel margin.
pub fn sweep_scale(size: u32) -> i64 {
    i64::from(size) - 2
}

/// Run one full sweep of `params` into a fresh `2·size` grid.
pub fn accumulate_sweep(
    size: u32,
    max_intensity: u8,
    params: &LissajousParams,
    cycles: f64,
    res: f64,
) -> LissajousResult<IntensityGrid> {
    let side = 2 * size as usize;
    let mut grid = IntensityGrid::new(side, max_intensity)?;
    let scale = sweep_scale(size);
    for (x, y) in CurveSampler::new(*params, cycles, res)? {
        grid.paint(x, y, scale);
    }
    Ok(grid)
}

/// Build one frame: sweep, accumulate, then map intensities to palette indices.
///
/// The frame is `(2·size+1) × (2·size-1)` while the grid is `2·size` square: grid cell `(x, y)`
/// becomes pixel `(x, y)`, the last grid row is cropped and the extra column stays at index 0.
pub fn build_frame(
    size: u32,
    palette: &Palette,
    params: &LissajousParams,
    cycles: f64,
    res: f64,
) -> LissajousResult<IndexedFrame> {
    let canvas = Canvas::for_size(size)?;
    let grid = accumulate_sweep(size, palette.max_intensity(), params, cycles, res)?;
    Ok(grid_to_frame(&grid, canvas))
}

fn grid_to_frame(grid: &IntensityGrid, canvas: Canvas) -> IndexedFrame {
    let mut indices = vec![0u8; canvas.pixel_count()];
    let width = canvas.width as usize;
    let rows = (canvas.height as usize).min(grid.side());
    let cols = width.min(grid.side());
    for y in 0..rows {
        let row = &mut indices[y * width..y * width + cols];
        for (x, px) in row.iter_mut().enumerate() {
            *px = grid.get(x, y).unwrap_or(0);
        }
    }
    IndexedFrame {
        width: canvas.width,
        height: canvas.height,
        indices,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
