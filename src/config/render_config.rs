use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::curve::params::LissajousParams;
use crate::curve::sampler::sample_count;
use crate::foundation::core::Canvas;
use crate::foundation::error::{LissajousError, LissajousResult};

/// Largest half-width whose canvas (`2·size+1` wide) still fits a GIF's `u16` dimensions.
pub const MAX_SIZE: u32 = (u16::MAX as u32 - 1) / 2;

/// Immutable description of one animation render.
///
/// Defaults reproduce the classic output: a single 201×199 frame of the 5:4 curve.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output animation path.
    #[serde(alias = "outfile")]
    pub out_path: PathBuf,
    /// Number of frames to render.
    pub nframes: u64,
    /// Half-width of the image in pixels.
    pub size: u32,
    /// Delay between frames in hundredths of a second.
    pub delay: u16,
    /// Sweep length in full turns of `t`.
    pub cycles: f64,
    /// Initial x frequency.
    pub xfreq: f64,
    /// X frequency increment per frame.
    pub xfreq_inc: f64,
    /// Initial y frequency.
    pub yfreq: f64,
    /// Y frequency increment per frame.
    pub yfreq_inc: f64,
    /// Initial x phase.
    pub xphase: f64,
    /// X phase increment per frame.
    pub xphase_inc: f64,
    /// Initial y phase.
    pub yphase: f64,
    /// Y phase increment per frame.
    pub yphase_inc: f64,
    /// Angular step between samples.
    pub res: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from("out.gif"),
            nframes: 1,
            size: 100,
            delay: 8,
            cycles: 2.0,
            xfreq: 5.0,
            xfreq_inc: 0.0,
            yfreq: 4.0,
            yfreq_inc: 0.0,
            xphase: 0.0,
            xphase_inc: 0.0,
            yphase: 0.0,
            yphase_inc: 0.01,
            res: 0.0001,
        }
    }
}

impl RenderConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> LissajousResult<Self> {
        serde_json::from_str(s).map_err(|e| LissajousError::serde(format!("parse config: {e}")))
    }

    /// Load a JSON config file.
    pub fn from_json_path(path: &Path) -> LissajousResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open render config '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            LissajousError::serde(format!("parse render config '{}': {e}", path.display()))
        })
    }

    /// Serialize as pretty JSON, loadable by [`RenderConfig::from_json_str`].
    pub fn to_json_pretty(&self) -> LissajousResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LissajousError::serde(e.to_string()))
    }

    /// Reject configurations that cannot render, before any frame work starts.
    pub fn validate(&self) -> LissajousResult<()> {
        if self.size == 0 {
            return Err(LissajousError::validation("size must be > 0"));
        }
        if self.size > MAX_SIZE {
            return Err(LissajousError::validation(format!(
                "size must be <= {MAX_SIZE} (frame dimensions are limited to 65535 pixels)"
            )));
        }
        if !self.cycles.is_finite() || self.cycles <= 0.0 {
            return Err(LissajousError::validation(format!(
                "cycles must be finite and > 0 (got {})",
                self.cycles
            )));
        }
        if !self.initial_params().is_finite() {
            return Err(LissajousError::validation(
                "frequencies and phases must be finite",
            ));
        }
        if !self.param_increments().is_finite() {
            return Err(LissajousError::validation(
                "frequency and phase increments must be finite",
            ));
        }
        sample_count(self.cycles, self.res)?;
        Ok(())
    }

    /// Parameters of frame 0.
    pub fn initial_params(&self) -> LissajousParams {
        LissajousParams {
            xfreq: self.xfreq,
            yfreq: self.yfreq,
            xphase: self.xphase,
            yphase: self.yphase,
        }
    }

    /// Per-frame parameter drift.
    pub fn param_increments(&self) -> LissajousParams {
        LissajousParams {
            xfreq: self.xfreq_inc,
            yfreq: self.yfreq_inc,
            xphase: self.xphase_inc,
            yphase: self.yphase_inc,
        }
    }

    /// Output frame dimensions.
    pub fn canvas(&self) -> LissajousResult<Canvas> {
        Canvas::for_size(self.size)
    }

    /// Container loop count. Mirrors the frame count; `0` loops forever.
    pub fn loop_count(&self) -> u16 {
        u16::try_from(self.nframes).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/render_config.rs"]
mod tests;
