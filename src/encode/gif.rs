use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context as _;
use ::gif::{Encoder, Frame, Repeat};

use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{LissajousError, LissajousResult};
use crate::render::frame::IndexedFrame;

use super::sink::{AnimationSink, SinkConfig, check_frame_dims};

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> LissajousResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

enum State<W: Write> {
    Idle(W),
    Encoding { enc: Encoder<W>, canvas: Canvas },
    Done(W),
    Poisoned,
}

/// GIF sink: one global color table, one image block per frame.
pub struct GifSink<W: Write> {
    state: State<W>,
}

impl GifSink<BufWriter<File>> {
    /// Create (truncate) `path` and wrap it in a sink.
    pub fn create(path: &Path) -> LissajousResult<Self> {
        ensure_parent_dir(path)?;
        let f = File::create(path)
            .with_context(|| format!("failed to create output file '{}'", path.display()))?;
        Ok(Self::new(BufWriter::new(f)))
    }
}

impl<W: Write> GifSink<W> {
    /// Wrap an arbitrary byte sink. Nothing is written until `begin`.
    pub fn new(writer: W) -> Self {
        Self {
            state: State::Idle(writer),
        }
    }

    /// Return the underlying writer once `end` has completed.
    pub fn into_inner(self) -> Option<W> {
        match self.state {
            State::Done(w) => Some(w),
            _ => None,
        }
    }
}

fn gif_err(what: &str, e: impl std::fmt::Display) -> LissajousError {
    LissajousError::encode(format!("{what}: {e}"))
}

impl<W: Write> AnimationSink for GifSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> LissajousResult<()> {
        let State::Idle(writer) = std::mem::replace(&mut self.state, State::Poisoned) else {
            return Err(LissajousError::encode("gif sink already started"));
        };
        let width = u16::try_from(cfg.canvas.width)
            .map_err(|_| LissajousError::encode("gif width exceeds 65535"))?;
        let height = u16::try_from(cfg.canvas.height)
            .map_err(|_| LissajousError::encode("gif height exceeds 65535"))?;

        let mut enc = Encoder::new(writer, width, height, &cfg.palette.to_rgb_bytes())
            .map_err(|e| gif_err("failed to write gif header", e))?;
        let repeat = match cfg.loop_count {
            0 => Repeat::Infinite,
            n => Repeat::Finite(n),
        };
        enc.set_repeat(repeat)
            .map_err(|e| gif_err("failed to write gif loop extension", e))?;

        tracing::debug!(width, height, frames = cfg.frame_count, "gif encode started");
        self.state = State::Encoding {
            enc,
            canvas: cfg.canvas,
        };
        Ok(())
    }

    fn push_frame(
        &mut self,
        idx: FrameIndex,
        frame: &IndexedFrame,
        delay: u16,
    ) -> LissajousResult<()> {
        let State::Encoding { enc, canvas } = &mut self.state else {
            return Err(LissajousError::encode("gif sink is not encoding"));
        };
        check_frame_dims(*canvas, frame)?;

        let block = Frame {
            width: canvas.width as u16,
            height: canvas.height as u16,
            delay,
            buffer: Cow::Borrowed(frame.indices.as_slice()),
            ..Frame::default()
        };
        enc.write_frame(&block)
            .map_err(|e| gif_err(&format!("failed to write gif frame {}", idx.0), e))
    }

    fn end(&mut self) -> LissajousResult<()> {
        let State::Encoding { enc, .. } = std::mem::replace(&mut self.state, State::Poisoned)
        else {
            return Err(LissajousError::encode("gif sink is not encoding"));
        };
        let mut writer = enc
            .into_inner()
            .map_err(|e| gif_err("failed to write gif trailer", e))?;
        writer
            .flush()
            .map_err(|e| gif_err("failed to flush gif output", e))?;
        self.state = State::Done(writer);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
