//! Parametric sine-sine curve and its sampling.

/// Sweep parameters and their per-frame drift.
pub mod params;
/// Fixed-step sweep iterator.
pub mod sampler;
