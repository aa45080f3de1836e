use glam::Vec2;

use crate::content::TextAlign;

/// Everything the text collaborator needs to shape one run of text.
///
/// Borrowed straight out of the node so no strings are cloned per measure.
#[derive(Debug, Clone, Copy)]
pub struct ShapeRequest<'a> {
    /// Font family name (never empty)
    pub font: &'a str,
    /// Font size in pixels
    pub font_size: f32,
    /// Line height in pixels
    pub line_height: f32,
    /// The text to shape
    pub text: &'a str,
    /// Horizontal alignment within the wrap width
    pub align: TextAlign,
    /// Wrap width in pixels. May be zero or negative when the surrounding
    /// tree has not settled on a width yet; the measurer must still produce
    /// a deterministic result (typically one word per line).
    pub max_width: f32,
    /// When set, ignore `max_width` and shape a single line
    pub no_wrap: bool,
}

/// Shaped glyph geometry returned by a [`TextMeasurer`].
///
/// The layout engine only reads `bounds`; positions and sizes are carried
/// for the paint stage.
#[derive(Debug, Clone, Default)]
pub struct ShapedText {
    /// Top-left corner of each glyph, relative to the text origin
    pub positions: Vec<Vec2>,
    /// Size of each glyph
    pub sizes: Vec<Vec2>,
    /// Tight bounding size of the shaped run (width of the longest line,
    /// total height of all lines)
    pub bounds: Vec2,
}

/// Text shaping and measurement collaborator.
///
/// The engine consumes this; it never implements shaping itself. An
/// implementation must be deterministic (same request, same result within a
/// `layout()` call) and must not fail: unknown fonts or glyphs fall back to
/// a replacement glyph rather than an error.
///
/// `&mut self` so implementations can maintain glyph caches across calls.
pub trait TextMeasurer {
    /// Shape a run of text and report its geometry
    fn shape(&mut self, request: ShapeRequest<'_>) -> ShapedText;
}
