/// Content that can be displayed in a node
///
/// Content nodes are leaf nodes that cannot have children. The layout engine
/// never interprets the text itself; it forwards these fields to the
/// [`TextMeasurer`](crate::measure::TextMeasurer) and uses the returned
/// bounds.
#[derive(Debug, Clone)]
pub enum Content {
    /// Text content with styling
    Text(TextContent),
}

/// Horizontal alignment of text within its node
///
/// Forwarded to the measurer; the layout engine does not act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text content configuration
#[derive(Debug, Clone)]
pub struct TextContent {
    /// The text to display
    pub text: String,
    /// Font family name
    pub font: String,
    /// Font size in pixels
    pub font_size: f32,
    /// Line height in pixels
    pub line_height: f32,
    /// Horizontal alignment within the wrap width
    pub align: TextAlign,
    /// Disable wrapping: the measurer lays the text out as a single line
    /// regardless of the available width
    pub no_wrap: bool,
}

impl TextContent {
    /// Create new text content with default styling
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: "sans-serif".to_string(),
            font_size: 16.0,
            line_height: 19.0,
            align: TextAlign::Left,
            no_wrap: false,
        }
    }

    /// Set the font family
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Set the font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the line height
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the horizontal alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Disable wrapping
    pub fn with_no_wrap(mut self) -> Self {
        self.no_wrap = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_defaults() {
        let content = TextContent::new("hello");
        assert_eq!(content.text, "hello");
        assert_eq!(content.font, "sans-serif");
        assert_eq!(content.font_size, 16.0);
        assert_eq!(content.line_height, 19.0);
        assert_eq!(content.align, TextAlign::Left);
        assert!(!content.no_wrap);
    }

    #[test]
    fn test_text_content_builders() {
        let content = TextContent::new("hello")
            .with_font("Inter")
            .with_font_size(14.0)
            .with_line_height(25.0)
            .with_align(TextAlign::Center)
            .with_no_wrap();

        assert_eq!(content.font, "Inter");
        assert_eq!(content.font_size, 14.0);
        assert_eq!(content.line_height, 25.0);
        assert_eq!(content.align, TextAlign::Center);
        assert!(content.no_wrap);
    }
}
