//! Trait for querying glyph metrics.

/// Reports the metrics of the font the renderer draws strings with.
///
/// # Example
///
/// ```ignore
/// use game_console::FontMetrics;
///
/// struct BitmapFont {
///     glyph_height: f32,
/// }
///
/// impl FontMetrics for BitmapFont {
///     fn line_height(&self) -> f32 {
///         self.glyph_height
///     }
/// }
/// ```
pub trait FontMetrics {
    /// Height of one line of text in viewport units.
    fn line_height(&self) -> f32;
}

impl<T: FontMetrics + ?Sized> FontMetrics for &T {
    fn line_height(&self) -> f32 {
        (**self).line_height()
    }
}
