use rayon::prelude::*;

use crate::config::render_config::RenderConfig;
use crate::curve::params::LissajousParams;
use crate::curve::sampler::sample_count;
use crate::encode::gif::GifSink;
use crate::encode::sink::{AnimationSink, SinkConfig};
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::raster::palette::Palette;
use crate::render::frame::{IndexedFrame, build_frame};

#[derive(Clone, Debug, Default)]
/// Threading controls for multi-frame rendering.
pub struct RenderThreading {
    /// Render frames on a rayon pool from closed-form parameters when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
}

impl RenderThreading {
    /// Reject thread settings that cannot build a pool.
    pub fn validate(&self) -> LissajousResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(LissajousError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Observer notified once per finished frame, with a monotonically increasing count.
pub trait RenderProgress {
    /// `done` frames out of `total` are complete.
    fn frame_rendered(&mut self, done: u64, total: u64);
}

/// Progress observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl RenderProgress for NoProgress {
    fn frame_rendered(&mut self, _done: u64, _total: u64) {}
}

impl<F: FnMut(u64, u64)> RenderProgress for F {
    fn frame_rendered(&mut self, done: u64, total: u64) {
        self(done, total)
    }
}

/// A complete rendered animation, ready to hand to a sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    /// Dimensions shared by every frame.
    pub canvas: Canvas,
    /// Color table every frame indexes into.
    pub palette: Palette,
    /// Frames in display order.
    pub frames: Vec<IndexedFrame>,
    /// Per-frame delay in hundredths of a second, parallel to `frames`.
    pub delays: Vec<u16>,
    /// Container loop count (`0` loops forever).
    pub loop_count: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counters reported by [`render_to_gif`].
pub struct RenderStats {
    /// Frames rendered and encoded.
    pub frames_rendered: u64,
    /// Curve samples swept per frame.
    pub samples_per_frame: u64,
}

/// Render every frame of `cfg`.
///
/// Sequential mode owns one [`LissajousParams`] and advances it by the configured increments
/// after each frame. Parallel mode computes each frame's parameters in closed form and renders
/// frames independently; frame order is preserved either way.
pub fn render_animation(
    cfg: &RenderConfig,
    threading: &RenderThreading,
    progress: &mut dyn RenderProgress,
) -> LissajousResult<Animation> {
    cfg.validate()?;
    threading.validate()?;
    render_validated(cfg, threading, progress)
}

#[tracing::instrument(skip(cfg, progress), fields(nframes = cfg.nframes, size = cfg.size))]
fn render_validated(
    cfg: &RenderConfig,
    threading: &RenderThreading,
    progress: &mut dyn RenderProgress,
) -> LissajousResult<Animation> {
    let canvas = cfg.canvas()?;
    let palette = Palette::gradient();

    let frames = if threading.parallel {
        render_parallel(cfg, &palette, threading.threads, progress)?
    } else {
        render_sequential(cfg, &palette, progress)?
    };

    tracing::info!(frames = frames.len(), "animation rendered");
    Ok(Animation {
        canvas,
        palette,
        delays: vec![cfg.delay; frames.len()],
        frames,
        loop_count: cfg.loop_count(),
    })
}

fn render_sequential(
    cfg: &RenderConfig,
    palette: &Palette,
    progress: &mut dyn RenderProgress,
) -> LissajousResult<Vec<IndexedFrame>> {
    let total = cfg.nframes;
    let inc = cfg.param_increments();
    let mut state = cfg.initial_params();
    let mut out = Vec::with_capacity(total.min(4096) as usize);
    for i in 0..total {
        out.push(build_frame(cfg.size, palette, &state, cfg.cycles, cfg.res)?);
        state.advance(&inc);
        tracing::debug!(frame = i, "frame rendered");
        progress.frame_rendered(i + 1, total);
    }
    Ok(out)
}

fn render_parallel(
    cfg: &RenderConfig,
    palette: &Palette,
    threads: Option<usize>,
    progress: &mut dyn RenderProgress,
) -> LissajousResult<Vec<IndexedFrame>> {
    let base = cfg.initial_params();
    let inc = cfg.param_increments();
    let total = cfg.nframes;
    let pool = build_thread_pool(threads)?;

    // Workers signal each finished frame; the calling thread drains the channel so the
    // observer sees progress while the pool is still busy.
    let (tx, rx) = std::sync::mpsc::channel::<()>();
    let mut rendered = None;
    pool.in_place_scope(|s| {
        let slot = &mut rendered;
        s.spawn(move |_| {
            *slot = Some(
                (0..total)
                    .into_par_iter()
                    .map_with(tx, |tx, i| {
                        let params = LissajousParams::at_frame(&base, &inc, i);
                        let frame = build_frame(cfg.size, palette, &params, cfg.cycles, cfg.res);
                        tracing::debug!(frame = i, "frame rendered");
                        let _ = tx.send(());
                        frame
                    })
                    .collect::<Vec<_>>(),
            );
        });

        let mut done = 0u64;
        while rx.recv().is_ok() {
            done += 1;
            progress.frame_rendered(done, total);
        }
    });

    rendered
        .ok_or_else(|| {
            LissajousError::Other(anyhow::anyhow!("parallel render produced no frame list"))
        })?
        .into_iter()
        .collect()
}

/// Render only frame `index`, using closed-form parameters.
pub fn render_single_frame(cfg: &RenderConfig, index: FrameIndex) -> LissajousResult<IndexedFrame> {
    cfg.validate()?;
    if index.0 >= cfg.nframes {
        return Err(LissajousError::validation(format!(
            "frame index {} out of range for {} frame(s)",
            index.0, cfg.nframes
        )));
    }
    let params =
        LissajousParams::at_frame(&cfg.initial_params(), &cfg.param_increments(), index.0);
    build_frame(cfg.size, &Palette::gradient(), &params, cfg.cycles, cfg.res)
}

/// Hand a complete animation to `sink`, preserving frame order and delays.
pub fn write_animation(anim: &Animation, sink: &mut dyn AnimationSink) -> LissajousResult<()> {
    if anim.frames.len() != anim.delays.len() {
        return Err(LissajousError::encode(format!(
            "{} frame(s) but {} delay value(s)",
            anim.frames.len(),
            anim.delays.len()
        )));
    }
    sink.begin(SinkConfig {
        canvas: anim.canvas,
        palette: anim.palette,
        loop_count: anim.loop_count,
        frame_count: anim.frames.len() as u64,
    })?;
    for (i, (frame, &delay)) in anim.frames.iter().zip(&anim.delays).enumerate() {
        sink.push_frame(FrameIndex(i as u64), frame, delay)?;
    }
    sink.end()
}

/// Render `cfg` to a GIF file at `cfg.out_path`.
///
/// Configuration and threading are checked before the output file is touched, and the file is
/// created before any rendering so an unwritable path fails fast. Encoding
/// starts only once every frame has rendered.
pub fn render_to_gif(
    cfg: &RenderConfig,
    threading: &RenderThreading,
    progress: &mut dyn RenderProgress,
) -> LissajousResult<RenderStats> {
    cfg.validate()?;
    threading.validate()?;
    let mut sink = GifSink::create(&cfg.out_path)?;
    let anim = render_validated(cfg, threading, progress)?;
    write_animation(&anim, &mut sink)?;
    tracing::info!(path = %cfg.out_path.display(), "wrote gif");
    Ok(RenderStats {
        frames_rendered: anim.frames.len() as u64,
        samples_per_frame: sample_count(cfg.cycles, cfg.res)?,
    })
}

fn build_thread_pool(threads: Option<usize>) -> LissajousResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        LissajousError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/driver.rs"]
mod tests;
