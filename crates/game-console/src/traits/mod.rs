//! Capabilities the host injects into the console.

mod font_metrics;
mod renderer;

pub use font_metrics::FontMetrics;
pub use renderer::{BlendMode, Renderer};
