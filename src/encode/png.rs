use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{LissajousError, LissajousResult};
use crate::raster::palette::Palette;
use crate::render::frame::IndexedFrame;

use super::gif::ensure_parent_dir;

/// Expand `frame` through `palette` and write it as an RGB8 PNG.
pub fn save_frame_png(frame: &IndexedFrame, palette: &Palette, path: &Path) -> LissajousResult<()> {
    let rgb = frame.to_rgb8(palette)?;
    let img = image::RgbImage::from_raw(frame.width, frame.height, rgb).ok_or_else(|| {
        LissajousError::encode("frame buffer length does not match width*height")
    })?;

    ensure_parent_dir(path)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "wrote png");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
