use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::raster::palette::Palette;
use crate::render::frame::IndexedFrame;

/// Configuration provided to an [`AnimationSink`] before any frame is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Dimensions every pushed frame must have.
    pub canvas: Canvas,
    /// Color table the frame indices refer to.
    pub palette: Palette,
    /// Container loop count (`0` loops forever).
    pub loop_count: u16,
    /// Number of frames that will be pushed.
    pub frame_count: u64,
}

/// Sink contract for consuming a finished animation.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order, once per
/// frame, between one `begin` and one `end`.
pub trait AnimationSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> LissajousResult<()>;
    /// Push one frame with its display delay (hundredths of a second).
    fn push_frame(&mut self, idx: FrameIndex, frame: &IndexedFrame, delay: u16)
    -> LissajousResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> LissajousResult<()>;
}

/// Reject frames whose dimensions differ from the configured canvas.
pub(crate) fn check_frame_dims(canvas: Canvas, frame: &IndexedFrame) -> LissajousResult<()> {
    if frame.width != canvas.width || frame.height != canvas.height {
        return Err(LissajousError::encode(format!(
            "frame size mismatch: got {}x{}, expected {}x{}",
            frame.width, frame.height, canvas.width, canvas.height
        )));
    }
    if frame.indices.len() != canvas.pixel_count() {
        return Err(LissajousError::encode(
            "frame index buffer length does not match width*height",
        ));
    }
    Ok(())
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, IndexedFrame, u16)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames with their delays.
    pub fn frames(&self) -> &[(FrameIndex, IndexedFrame, u16)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl AnimationSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> LissajousResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: FrameIndex,
        frame: &IndexedFrame,
        delay: u16,
    ) -> LissajousResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| LissajousError::encode("push_frame called before begin"))?;
        check_frame_dims(cfg.canvas, frame)?;
        self.frames.push((idx, frame.clone(), delay));
        Ok(())
    }

    fn end(&mut self) -> LissajousResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
