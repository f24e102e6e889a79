//! Frame construction and the animation driver.

/// Multi-frame rendering, progress reporting and sink hand-off.
pub mod driver;
/// Single-frame sweep, accumulation and palette mapping.
pub mod frame;
