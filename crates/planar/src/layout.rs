/// Size specification for a node's width or height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Size {
    /// Derived from content: children for containers, measured text for leaves
    Auto,
    /// Fixed size in pixels
    Pixels(f32),
    /// Percentage of the parent's size (0.0 to 100.0)
    Percent(f32),
}

impl Size {
    /// Create a fixed pixel size
    pub const fn px(pixels: f32) -> Self {
        Self::Pixels(pixels)
    }

    /// Create a percentage size (`50.0` means 50% of the parent)
    pub const fn percent(percent: f32) -> Self {
        Self::Percent(percent)
    }

    /// Check if this size is Auto
    pub const fn is_auto(&self) -> bool {
        matches!(self, Size::Auto)
    }

    /// Resolve against a parent size, returning `None` for `Auto`
    ///
    /// `Auto` cannot be resolved here - it is computed by the layout engine
    /// from content (hug sizing).
    pub fn try_resolve(&self, parent_size: f32) -> Option<f32> {
        match self {
            Size::Auto => None,
            Size::Pixels(px) => Some(*px),
            Size::Percent(pct) => Some(pct / 100.0 * parent_size),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::Auto
    }
}

impl From<&str> for Size {
    /// Parse a size shorthand: `"auto"`, `"120px"`, `"120"`, or `"50%"`.
    ///
    /// # Panics
    /// Panics on malformed input (e.g. a percent value without a trailing
    /// `%`, or a non-numeric string). Malformed sizes are programmer errors
    /// and must not produce a partially-resolved tree.
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Size::Auto;
        }
        if let Some(pct) = trimmed.strip_suffix('%') {
            let value: f32 = pct
                .trim()
                .parse()
                .unwrap_or_else(|_| panic!("Invalid percent size: '{s}'"));
            return Size::Percent(value);
        }
        let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
        let value: f32 = digits.parse().unwrap_or_else(|_| {
            panic!("Invalid size: '{s}' (expected 'auto', a pixel value, or a trailing '%')")
        });
        Size::Pixels(value)
    }
}

/// Direction children are laid out along (the main axis).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexDirection {
    /// Children flow horizontally, left to right
    #[default]
    Row,
    /// Children flow vertically, top to bottom
    Column,
}

/// Main-axis distribution of children within the content box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JustifyContent {
    /// Pack children at the content-box origin
    #[default]
    Start,
    /// Center the run of children
    Center,
    /// Pack children at the far edge
    End,
    /// N-1 equal gaps, no leading/trailing space
    SpaceBetween,
    /// N equal gaps, half a gap before the first and after the last child
    SpaceAround,
    /// N+1 equal gaps, a full gap before the first and after the last child
    SpaceEvenly,
}

impl JustifyContent {
    /// The three `Space*` variants synthesize their own spacing and ignore
    /// both the style gap and flex factors.
    pub const fn is_spaced(&self) -> bool {
        matches!(
            self,
            JustifyContent::SpaceBetween | JustifyContent::SpaceAround | JustifyContent::SpaceEvenly
        )
    }
}

/// Cross-axis alignment, used for both `align_items` and `align_self`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignItems {
    /// Flush with the content-box origin
    #[default]
    Start,
    /// Centered within the parent's cross-axis content box
    Center,
    /// Flush with the far edge
    End,
    /// Expand an Auto cross-axis size to fill the parent's content box.
    /// An explicit size is never overridden.
    Stretch,
}

/// Positioning scheme for a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    /// Participates in flow placement and hug sizing
    #[default]
    Relative,
    /// Positioned purely from its own offsets; never affects siblings
    Absolute,
}

/// Whether a node takes part in layout at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Flex,
    /// Skipped entirely: consumes no space and advances no placement cursor
    None,
}

/// Computed rectangle for a node, filled in by `layout()`.
///
/// Reinitialized to zero at the start of every `layout()` call. After
/// `layout()` returns, `x`, `y`, `width` and `height` hold integral values
/// and `width`/`height` are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutState {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Resolved stacking order (inherited from the parent when unset)
    pub z_index: i32,
}

impl LayoutState {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
        z_index: 0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_parse_auto() {
        assert_eq!(Size::from("auto"), Size::Auto);
        assert_eq!(Size::from(" Auto "), Size::Auto);
    }

    #[test]
    fn test_size_parse_pixels() {
        assert_eq!(Size::from("120px"), Size::Pixels(120.0));
        assert_eq!(Size::from("16.5"), Size::Pixels(16.5));
    }

    #[test]
    fn test_size_parse_percent() {
        assert_eq!(Size::from("50%"), Size::Percent(50.0));
        assert_eq!(Size::from("12.5 %"), Size::Percent(12.5));
    }

    #[test]
    #[should_panic(expected = "Invalid size")]
    fn test_size_parse_garbage_panics() {
        let _ = Size::from("wide");
    }

    #[test]
    fn test_size_try_resolve() {
        assert_eq!(Size::px(40.0).try_resolve(200.0), Some(40.0));
        assert_eq!(Size::percent(25.0).try_resolve(200.0), Some(50.0));
        assert_eq!(Size::Auto.try_resolve(200.0), None);
    }

    #[test]
    fn test_spaced_variants() {
        assert!(JustifyContent::SpaceBetween.is_spaced());
        assert!(JustifyContent::SpaceAround.is_spaced());
        assert!(JustifyContent::SpaceEvenly.is_spaced());
        assert!(!JustifyContent::Center.is_spaced());
    }
}
