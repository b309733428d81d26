//! Trait for issuing draw calls to the host's rendering backend.

use crate::geometry::{Color, Projection, Rect};

/// How filled shapes combine with what is already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Overwrite the destination.
    #[default]
    Opaque,
    /// Source-alpha / one-minus-source-alpha blending.
    Alpha,
}

/// Immediate-mode drawing capability lent to the console each frame.
///
/// Coordinates are in viewport units with a bottom-left origin, transformed
/// by the last projection set. Text is positioned by its top-left corner.
///
/// # Example
///
/// ```ignore
/// use game_console::{BlendMode, Color, Projection, Rect, Renderer};
///
/// struct GlRenderer { /* shape batch, sprite batch, font */ }
///
/// impl Renderer for GlRenderer {
///     fn set_projection(&mut self, projection: &Projection) {
///         self.shapes.set_matrix(&projection.matrix);
///         self.sprites.set_matrix(&projection.matrix);
///     }
///     fn set_blend_mode(&mut self, mode: BlendMode) { /* glBlendFunc */ }
///     fn set_color(&mut self, color: Color) { self.color = color; }
///     fn fill_rect(&mut self, rect: Rect) { self.shapes.rect(rect, self.color); }
///     fn draw_text(&mut self, text: &str, x: f32, y: f32) {
///         self.font.draw(&mut self.sprites, text, x, y, self.color);
///     }
/// }
/// ```
pub trait Renderer {
    /// Set the transform applied to subsequent calls.
    fn set_projection(&mut self, projection: &Projection);

    /// Set how subsequent fills are blended.
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Set the colour for subsequent fills and text.
    fn set_color(&mut self, color: Color);

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect);

    /// Draw a string with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
}
