use crate::foundation::error::{LissajousError, LissajousResult};

/// Sub-pixel tap offsets applied on both axes by [`IntensityGrid::paint`].
pub const SPLAT_OFFSETS: [f64; 3] = [-0.55, 0.0, 0.55];

/// Square grid of saturating hit counters.
///
/// Cells are addressed as `(x, y)` with both coordinates in `[0, side)`. Every cell holds a value
/// in `[0, max_intensity]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityGrid {
    side: usize,
    max_intensity: u8,
    cells: Vec<u8>,
}

impl IntensityGrid {
    /// Allocate a zeroed `side × side` grid.
    pub fn new(side: usize, max_intensity: u8) -> LissajousResult<Self> {
        let len = side
            .checked_mul(side)
            .ok_or_else(|| LissajousError::validation("intensity grid side overflows"))?;
        Ok(Self {
            side,
            max_intensity,
            cells: vec![0; len],
        })
    }

    /// Grid side length in cells.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Saturation cap.
    pub fn max_intensity(&self) -> u8 {
        self.max_intensity
    }

    /// Intensity at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.side || y >= self.side {
            return None;
        }
        Some(self.cells[x * self.side + y])
    }

    /// Raw cells, `x`-major.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Splat one unit-square sample onto the grid.
    ///
    /// The point is scaled by `scale` and recentred on cell `(scale, scale)`. Each of the nine
    /// `SPLAT_OFFSETS × SPLAT_OFFSETS` taps lands on `scale + trunc(p + offset)` per axis;
    /// truncation toward zero (not rounding or flooring) is part of the output contract, so taps
    /// around the origin collapse onto one cell. Taps outside the grid are skipped, never clamped
    /// onto the border.
    pub fn paint(&mut self, x: f64, y: f64, scale: i64) {
        let scale_f = scale as f64;
        let px = x * scale_f;
        let py = y * scale_f;
        for dx in SPLAT_OFFSETS {
            let Some(cx) = self.cell_coord(scale, px + dx) else {
                continue;
            };
            for dy in SPLAT_OFFSETS {
                let Some(cy) = self.cell_coord(scale, py + dy) else {
                    continue;
                };
                let cell = &mut self.cells[cx * self.side + cy];
                *cell = cell.saturating_add(1).min(self.max_intensity);
            }
        }
    }

    fn cell_coord(&self, scale: i64, v: f64) -> Option<usize> {
        let c = scale.checked_add(v as i64)?;
        let c = usize::try_from(c).ok()?;
        (c < self.side).then_some(c)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/grid.rs"]
mod tests;
