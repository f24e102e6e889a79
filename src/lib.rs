//! Animated Lissajous curve renderer.
//!
//! A render sweeps the parametric curve `(sin(a·t + δa), sin(b·t + δb))`, splats every sample onto
//! a saturating intensity grid, maps intensities through a fixed 16-color gradient and collects one
//! indexed-color frame per animation step. Frequencies and phases drift by fixed increments from
//! frame to frame.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: [`CurveSampler`] yields `ceil(cycles·2π / res)` points per frame
//! 2. **Rasterize**: [`IntensityGrid::paint`] splats each point with nine sub-pixel taps
//! 3. **Build**: [`build_frame`] maps grid intensities to [`Palette`] indices
//! 4. **Drive**: [`render_animation`] renders every frame (sequentially or on a rayon pool)
//! 5. **Encode**: [`write_animation`] hands the frames to an [`AnimationSink`] such as [`GifSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Render configuration.
pub mod config;
/// Curve parameters and sampling.
pub mod curve;
/// Animation sinks (GIF, PNG, in-memory).
pub mod encode;
/// Intensity grid and palette.
pub mod raster;
/// Frame builder and animation driver.
pub mod render;

pub use crate::config::render_config::{MAX_SIZE, RenderConfig};
pub use crate::curve::params::LissajousParams;
pub use crate::curve::sampler::{CurveSampler, sample_count};
pub use crate::encode::gif::GifSink;
pub use crate::encode::png::save_frame_png;
pub use crate::encode::sink::{AnimationSink, InMemorySink, SinkConfig};
pub use crate::foundation::core::{Canvas, FrameIndex, Rgb8};
pub use crate::foundation::error::{LissajousError, LissajousResult};
pub use crate::raster::grid::{IntensityGrid, SPLAT_OFFSETS};
pub use crate::raster::palette::{PALETTE_LEN, Palette};
pub use crate::render::driver::{
    Animation, NoProgress, RenderProgress, RenderStats, RenderThreading, render_animation,
    render_single_frame, render_to_gif, write_animation,
};
pub use crate::render::frame::{IndexedFrame, accumulate_sweep, build_frame, sweep_scale};
