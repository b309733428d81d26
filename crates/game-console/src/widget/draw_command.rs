use crate::geometry::{Color, Projection, Rect};
use crate::traits::{BlendMode, Renderer};

/// One recorded draw call.
///
/// The widget assembles a list of these from state alone; replaying them
/// against a [`Renderer`] is the only side effect.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetProjection(Projection),
    SetBlendMode(BlendMode),
    SetColor(Color),
    FillRect(Rect),
    Text { text: String, x: f32, y: f32 },
}

impl DrawCommand {
    /// Issue this command to a renderer.
    pub fn apply<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match self {
            DrawCommand::SetProjection(projection) => renderer.set_projection(projection),
            DrawCommand::SetBlendMode(mode) => renderer.set_blend_mode(*mode),
            DrawCommand::SetColor(color) => renderer.set_color(*color),
            DrawCommand::FillRect(rect) => renderer.fill_rect(*rect),
            DrawCommand::Text { text, x, y } => renderer.draw_text(text, *x, *y),
        }
    }
}
