//! Console capabilities backed by a ratatui buffer
//!
//! One viewport unit is one terminal cell and one text line is one row.
//! Console coordinates have a bottom-left origin, so everything is mapped
//! through the projection into normalized device coordinates and from there
//! onto the buffer's top-down rows.

use game_console::{BlendMode, Color, FontMetrics, Projection, Rect, Renderer, Viewport};
use ratatui::buffer::Buffer;
use ratatui::layout;
use ratatui::style::{Color as CellColor, Style};

/// Glyph metrics of a terminal: every line is one row tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellFont;

impl FontMetrics for CellFont {
    fn line_height(&self) -> f32 {
        1.0
    }
}

/// Viewport of a terminal area in cell units.
pub fn viewport_of(area: layout::Rect) -> Viewport {
    Viewport::new(f32::from(area.width), f32::from(area.height))
}

/// Renderer drawing console commands into a ratatui buffer.
pub struct TerminalRenderer<'a> {
    buf: &'a mut Buffer,
    area: layout::Rect,
    projection: Projection,
    blend_mode: BlendMode,
    color: Color,
}

impl<'a> TerminalRenderer<'a> {
    pub fn new(buf: &'a mut Buffer, area: layout::Rect) -> Self {
        Self {
            buf,
            area,
            projection: Projection::for_viewport(viewport_of(area)),
            blend_mode: BlendMode::Opaque,
            color: Color::WHITE,
        }
    }

    /// Map a console point to fractional (column, row-from-top).
    fn to_cell(&self, x: f32, y: f32) -> (f32, f32) {
        let (ndc_x, ndc_y) = self.projection.project(x, y);
        let width = f32::from(self.area.width);
        let height = f32::from(self.area.height);
        ((ndc_x + 1.0) * 0.5 * width, (1.0 - ndc_y) * 0.5 * height)
    }

    /// Clamp a fractional cell coordinate into `0..=limit`.
    fn clamp_cell(value: f32, limit: u16) -> u16 {
        value.round().clamp(0.0, f32::from(limit)) as u16
    }

    fn blend(&self, under: CellColor) -> CellColor {
        let alpha = match self.blend_mode {
            BlendMode::Opaque => 1.0,
            BlendMode::Alpha => self.color.a.clamp(0.0, 1.0),
        };
        let (under_r, under_g, under_b) = match under {
            CellColor::Rgb(r, g, b) => (f32::from(r), f32::from(g), f32::from(b)),
            _ => (0.0, 0.0, 0.0),
        };
        let mix = |top: f32, bottom: f32| {
            (top.clamp(0.0, 1.0) * 255.0 * alpha + bottom * (1.0 - alpha)).round() as u8
        };
        CellColor::Rgb(
            mix(self.color.r, under_r),
            mix(self.color.g, under_g),
            mix(self.color.b, under_b),
        )
    }

    fn text_color(&self) -> CellColor {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        CellColor::Rgb(
            channel(self.color.r),
            channel(self.color.g),
            channel(self.color.b),
        )
    }
}

impl Renderer for TerminalRenderer<'_> {
    fn set_projection(&mut self, projection: &Projection) {
        self.projection = *projection;
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        let (left, top) = self.to_cell(rect.x, rect.y + rect.height);
        let (right, bottom) = self.to_cell(rect.x + rect.width, rect.y);

        let left = Self::clamp_cell(left, self.area.width);
        let right = Self::clamp_cell(right, self.area.width);
        let top = Self::clamp_cell(top, self.area.height);
        let bottom = Self::clamp_cell(bottom, self.area.height);

        for row in top..bottom {
            for column in left..right {
                let position = (self.area.x + column, self.area.y + row);
                let under = match self.buf.cell(position) {
                    Some(cell) => cell.bg,
                    None => continue,
                };
                let color = self.blend(under);
                if let Some(cell) = self.buf.cell_mut(position) {
                    cell.set_bg(color);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        let (column, row) = self.to_cell(x, y);
        let column = column.round();
        let row = row.round();
        if row < 0.0 || row >= f32::from(self.area.height) || column >= f32::from(self.area.width)
        {
            return;
        }

        let column = column.max(0.0) as u16;
        let row = row as u16;
        let remaining = usize::from(self.area.width - column);
        self.buf.set_stringn(
            self.area.x + column,
            self.area.y + row,
            text,
            remaining,
            Style::default().fg(self.text_color()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> layout::Rect {
        layout::Rect::new(0, 0, 20, 10)
    }

    #[test]
    fn test_fill_rect_maps_bottom_left_origin() {
        let mut buf = Buffer::empty(area());
        let mut renderer = TerminalRenderer::new(&mut buf, area());
        renderer.set_color(Color::rgba(1.0, 0.0, 0.0, 1.0));

        // Bottom two rows of the viewport
        renderer.fill_rect(Rect::new(0.0, 0.0, 20.0, 2.0));

        assert_eq!(buf[(0, 8)].bg, CellColor::Rgb(255, 0, 0));
        assert_eq!(buf[(19, 9)].bg, CellColor::Rgb(255, 0, 0));
        assert_eq!(buf[(0, 7)].bg, CellColor::Reset);
    }

    #[test]
    fn test_alpha_blend_over_black() {
        let mut buf = Buffer::empty(area());
        let mut renderer = TerminalRenderer::new(&mut buf, area());
        renderer.set_blend_mode(BlendMode::Alpha);
        renderer.set_color(Color::rgba(1.0, 1.0, 1.0, 0.5));
        renderer.fill_rect(Rect::new(0.0, 9.0, 1.0, 1.0));

        assert_eq!(buf[(0, 0)].bg, CellColor::Rgb(128, 128, 128));
    }

    #[test]
    fn test_text_top_edge_maps_to_row() {
        let mut buf = Buffer::empty(area());
        let mut renderer = TerminalRenderer::new(&mut buf, area());

        // Top edge at y = 10 is the first row
        renderer.draw_text("hi", 2.0, 10.0);
        // Off screen above
        renderer.draw_text("gone", 2.0, 11.0);

        assert_eq!(buf[(2, 0)].symbol(), "h");
        assert_eq!(buf[(3, 0)].symbol(), "i");
    }

    #[test]
    fn test_cell_font_line_height() {
        assert_eq!(CellFont.line_height(), 1.0);
    }
}
