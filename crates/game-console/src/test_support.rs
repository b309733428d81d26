//! Test doubles for the injected capabilities.

use crate::geometry::{Color, Projection, Rect};
use crate::traits::{BlendMode, FontMetrics, Renderer};
use crate::widget::DrawCommand;

/// Renderer that records every call it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl Renderer for RecordingRenderer {
    fn set_projection(&mut self, projection: &Projection) {
        self.commands.push(DrawCommand::SetProjection(*projection));
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.commands.push(DrawCommand::SetBlendMode(mode));
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}

/// Font with a fixed glyph height.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedFont(pub f32);

impl FontMetrics for FixedFont {
    fn line_height(&self) -> f32 {
        self.0
    }
}
