//! Render configuration.

/// The immutable [`RenderConfig`](render_config::RenderConfig) consumed by the driver.
pub mod render_config;
