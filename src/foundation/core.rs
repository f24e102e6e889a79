use crate::foundation::error::{LissajousError, LissajousResult};

/// Absolute 0-based frame index in animation order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas for a render of the given half-width.
    ///
    /// The frame is one column wider and one row shorter than the `2·size` intensity grid. The
    /// extra column stays at palette index 0 and the last grid row is cropped.
    pub fn for_size(size: u32) -> LissajousResult<Self> {
        if size == 0 {
            return Err(LissajousError::validation("size must be > 0"));
        }
        let width = size
            .checked_mul(2)
            .and_then(|w| w.checked_add(1))
            .ok_or_else(|| LissajousError::validation("size overflows canvas width"))?;
        Ok(Self {
            width,
            height: 2 * size - 1,
        })
    }

    /// Number of pixels in the canvas.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Straight (opaque) RGB8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sum of channels, used as a brightness proxy.
    pub fn luma_sum(self) -> u16 {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
