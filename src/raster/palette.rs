use crate::foundation::core::Rgb8;

/// Number of entries in the default gradient.
pub const PALETTE_LEN: usize = 16;

/// Grey-to-white gradient, darkest first.
const GRADIENT: [Rgb8; PALETTE_LEN] = [
    Rgb8::new(0x2c, 0x2f, 0x34),
    Rgb8::new(0x3b, 0x3e, 0x42),
    Rgb8::new(0x4a, 0x4d, 0x50),
    Rgb8::new(0x59, 0x5c, 0x5e),
    Rgb8::new(0x68, 0x6b, 0x6c),
    Rgb8::new(0x77, 0x7a, 0x7a),
    Rgb8::new(0x86, 0x89, 0x88),
    Rgb8::new(0x95, 0x98, 0x96),
    Rgb8::new(0xa4, 0xa7, 0x94),
    Rgb8::new(0xb3, 0xb6, 0xa2),
    Rgb8::new(0xc2, 0xc5, 0xb0),
    Rgb8::new(0xd1, 0xd4, 0xbe),
    Rgb8::new(0xe0, 0xe3, 0xcc),
    Rgb8::new(0xff, 0xf2, 0xda),
    Rgb8::new(0xff, 0xf1, 0xe8),
    Rgb8::new(0xff, 0xff, 0xff),
];

/// Immutable ordered color table shared by every frame.
///
/// Index 0 is the background; the last index is the brightest (saturated) intensity. Intensity
/// grids store palette indices directly, so `max_intensity()` is the rasterizer's cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [Rgb8],
}

impl Palette {
    /// The built-in 16-color gradient.
    pub const fn gradient() -> Self {
        Self { colors: &GRADIENT }
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false` for the built-in gradient.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Highest intensity value representable by this palette.
    pub fn max_intensity(&self) -> u8 {
        (self.colors.len().saturating_sub(1)).min(usize::from(u8::MAX)) as u8
    }

    /// Color at `index`, if in range.
    pub fn get(&self, index: u8) -> Option<Rgb8> {
        self.colors.get(usize::from(index)).copied()
    }

    /// Borrow the colors in index order.
    pub fn colors(&self) -> &'static [Rgb8] {
        self.colors
    }

    /// Flatten into packed `r,g,b` triples (the layout GIF color tables use).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.colors.len() * 3);
        for c in self.colors {
            out.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::gradient()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/palette.rs"]
mod tests;
