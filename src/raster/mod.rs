//! Intensity accumulation and the color table it indexes into.

/// Saturating intensity grid and the splatting rasterizer.
pub mod grid;
/// Fixed gradient palette.
pub mod palette;
