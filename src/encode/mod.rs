//! Encoding sinks.
//!
//! Sinks consume a finished animation in frame order; see [`sink::AnimationSink`].

/// GIF output via the `gif` crate.
pub mod gif;
/// Single-frame PNG export.
pub mod png;
/// Generic animation sink trait and built-in sinks.
pub mod sink;
