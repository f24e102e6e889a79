/// Frequencies and phases of one Lissajous sweep.
///
/// The same shape doubles as a per-frame increment: the driver owns one value for the current
/// frame and adds the configured increments after each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LissajousParams {
    /// X angular frequency.
    pub xfreq: f64,
    /// Y angular frequency.
    pub yfreq: f64,
    /// X phase offset in radians.
    pub xphase: f64,
    /// Y phase offset in radians.
    pub yphase: f64,
}

impl LissajousParams {
    /// Evaluate the curve at parameter `t`.
    #[inline]
    pub fn point(&self, t: f64) -> (f64, f64) {
        (
            (t * self.xfreq + self.xphase).sin(),
            (t * self.yfreq + self.yphase).sin(),
        )
    }

    /// Add `inc` component-wise (one frame of drift).
    pub fn advance(&mut self, inc: &LissajousParams) {
        self.xfreq += inc.xfreq;
        self.yfreq += inc.yfreq;
        self.xphase += inc.xphase;
        self.yphase += inc.yphase;
    }

    /// Closed-form parameters of frame `index`: `base + index·inc`.
    ///
    /// Independent of render order, which is what lets frames render in parallel.
    pub fn at_frame(base: &LissajousParams, inc: &LissajousParams, index: u64) -> Self {
        let k = index as f64;
        Self {
            xfreq: base.xfreq + k * inc.xfreq,
            yfreq: base.yfreq + k * inc.yfreq,
            xphase: base.xphase + k * inc.xphase,
            yphase: base.yphase + k * inc.yphase,
        }
    }

    /// `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.xfreq.is_finite()
            && self.yfreq.is_finite()
            && self.xphase.is_finite()
            && self.yphase.is_finite()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/params.rs"]
mod tests;
