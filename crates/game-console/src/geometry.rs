//! Viewport geometry, colours and the orthographic projection.
//!
//! All coordinates use a bottom-left origin with `y` growing upwards.

use game_console_config::console_config::Rgba;

/// RGBA colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Replace the colour channels, keeping alpha.
    pub fn with_rgb(self, r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: self.a }
    }
}

impl From<Rgba> for Color {
    fn from([r, g, b, a]: Rgba) -> Self {
        Self::rgba(r, g, b, a)
    }
}

/// Axis aligned rectangle; `(x, y)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Size of the visible screen area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Column-major 4x4 orthographic projection matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub matrix: [f32; 16],
}

impl Default for Projection {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Projection {
    #[rustfmt::skip]
    pub const IDENTITY: Projection = Projection {
        matrix: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// 2D orthographic projection for a `width` x `height` area at `(x, y)`,
    /// near plane 0 and far plane 1.
    ///
    /// Degenerate sizes yield the identity matrix.
    pub fn ortho_2d(x: f32, y: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::IDENTITY;
        }

        let (left, right, bottom, top, near, far) = (x, x + width, y, y + height, 0.0, 1.0);

        let mut matrix = Self::IDENTITY.matrix;
        matrix[0] = 2.0 / (right - left);
        matrix[5] = 2.0 / (top - bottom);
        matrix[10] = -2.0 / (far - near);
        matrix[12] = -(right + left) / (right - left);
        matrix[13] = -(top + bottom) / (top - bottom);
        matrix[14] = -(far + near) / (far - near);
        Self { matrix }
    }

    /// Projection covering the whole viewport.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::ortho_2d(0.0, 0.0, viewport.width, viewport.height)
    }

    /// Map a point to normalized device coordinates.
    pub fn project(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.matrix;
        (m[0] * x + m[4] * y + m[12], m[1] * x + m[5] * y + m[13])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-5 && (actual.1 - expected.1).abs() < 1e-5,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_ortho_maps_corners() {
        let projection = Projection::for_viewport(Viewport::new(800.0, 600.0));
        assert_near(projection.project(0.0, 0.0), (-1.0, -1.0));
        assert_near(projection.project(800.0, 600.0), (1.0, 1.0));
        assert_near(projection.project(400.0, 300.0), (0.0, 0.0));
    }

    #[test]
    fn test_degenerate_viewport_is_identity() {
        assert_eq!(
            Projection::for_viewport(Viewport::new(0.0, 600.0)),
            Projection::IDENTITY
        );
    }

    #[test]
    fn test_with_rgb_keeps_alpha() {
        let color = Color::rgba(0.1, 0.2, 0.3, 0.4).with_rgb(1.0, 0.5, 0.0);
        assert_eq!(color, Color::rgba(1.0, 0.5, 0.0, 0.4));
    }
}
