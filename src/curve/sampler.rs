use std::f64::consts::TAU;

use crate::curve::params::LissajousParams;
use crate::foundation::error::{LissajousError, LissajousResult};

/// Number of samples in a sweep of `cycles` full turns at angular step `res`.
///
/// Equals `ceil(cycles·2π / res)`: the sweep stops strictly before `t` reaches `cycles·2π`.
pub fn sample_count(cycles: f64, res: f64) -> LissajousResult<u64> {
    if !res.is_finite() || res <= 0.0 {
        return Err(LissajousError::validation(format!(
            "angular resolution must be finite and > 0 (got {res})"
        )));
    }
    if !cycles.is_finite() || cycles < 0.0 {
        return Err(LissajousError::validation(format!(
            "cycles must be finite and >= 0 (got {cycles})"
        )));
    }
    let n = (cycles * TAU / res).ceil();
    if n >= u64::MAX as f64 {
        return Err(LissajousError::validation(
            "sweep sample count overflows u64 (resolution too fine)",
        ));
    }
    Ok(n as u64)
}

/// Lazy, finite sweep over `t ∈ [0, cycles·2π)` in steps of `res`.
///
/// Sample `i` is evaluated at `t = i·res` rather than by accumulating `t += res`, so the sample
/// count is exact and independent of floating-point drift.
#[derive(Clone, Debug)]
pub struct CurveSampler {
    params: LissajousParams,
    res: f64,
    next: u64,
    len: u64,
}

impl CurveSampler {
    /// Start a fresh sweep. Rejects non-positive or non-finite `res` up front.
    pub fn new(params: LissajousParams, cycles: f64, res: f64) -> LissajousResult<Self> {
        let len = sample_count(cycles, res)?;
        Ok(Self {
            params,
            res,
            next: 0,
            len,
        })
    }

    /// Total samples in this sweep, including those already yielded.
    pub fn total(&self) -> u64 {
        self.len
    }

    /// Parameters this sweep evaluates.
    pub fn params(&self) -> &LissajousParams {
        &self.params
    }
}

impl Iterator for CurveSampler {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let t = self.next as f64 * self.res;
        self.next += 1;
        Some(self.params.point(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.len - self.next;
        match usize::try_from(rem) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/sampler.rs"]
mod tests;
