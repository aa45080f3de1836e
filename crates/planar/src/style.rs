use crate::layout::{AlignItems, Display, FlexDirection, JustifyContent, Position, Size};

/// Shorthand style input for a node.
///
/// All fields are `Option<T>` so partial styles read naturally: set only what
/// you mean, everything else falls back through the shorthand chain or to the
/// default. Shorthands overlap (`padding` vs `padding_left`); `resolve()`
/// folds them into an explicit [`ResolvedStyle`] where the most specific
/// property always wins, independent of declaration order.
#[derive(Clone, Debug, Default)]
pub struct Style {
    pub width: Option<Size>,
    pub height: Option<Size>,

    pub flex_direction: Option<FlexDirection>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    /// Per-node override of the parent's `align_items` (`None` = inherit)
    pub align_self: Option<AlignItems>,
    pub position: Option<Position>,
    pub display: Option<Display>,

    /// Share of the parent's leftover main-axis space (non-negative)
    pub flex: Option<f32>,

    /// Gap between children on both axes
    pub gap: Option<f32>,
    /// Main-axis gap for `Row` containers (wins over `gap`)
    pub gap_row: Option<f32>,
    /// Main-axis gap for `Column` containers (wins over `gap`)
    pub gap_column: Option<f32>,

    /// Stacking order; inherited from the parent when unset
    pub z_index: Option<i32>,

    pub left: Option<f32>,
    pub right: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,

    pub padding: Option<f32>,
    pub padding_horizontal: Option<f32>,
    pub padding_vertical: Option<f32>,
    pub padding_left: Option<f32>,
    pub padding_right: Option<f32>,
    pub padding_top: Option<f32>,
    pub padding_bottom: Option<f32>,

    pub margin: Option<f32>,
    pub margin_horizontal: Option<f32>,
    pub margin_vertical: Option<f32>,
    pub margin_left: Option<f32>,
    pub margin_right: Option<f32>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,

    // Border fields are carried through for the paint stage; layout never
    // reads them.
    pub border_width: Option<f32>,
    pub border_left_width: Option<f32>,
    pub border_right_width: Option<f32>,
    pub border_top_width: Option<f32>,
    pub border_bottom_width: Option<f32>,

    pub border_radius: Option<f32>,
    pub border_radius_top: Option<f32>,
    pub border_radius_bottom: Option<f32>,
    pub border_radius_top_left: Option<f32>,
    pub border_radius_top_right: Option<f32>,
    pub border_radius_bottom_left: Option<f32>,
    pub border_radius_bottom_right: Option<f32>,
}

/// Explicit per-edge style record produced by [`Style::resolve`].
///
/// This is what the layout passes read: no shorthands, no ambiguity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedStyle {
    pub width: Size,
    pub height: Size,

    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_self: Option<AlignItems>,
    pub position: Position,
    pub display: Display,

    pub flex: Option<f32>,

    pub gap_row: f32,
    pub gap_column: f32,

    pub z_index: Option<i32>,

    pub left: Option<f32>,
    pub right: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,

    pub padding_left: f32,
    pub padding_right: f32,
    pub padding_top: f32,
    pub padding_bottom: f32,

    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,

    pub border_left_width: f32,
    pub border_right_width: f32,
    pub border_top_width: f32,
    pub border_bottom_width: f32,

    pub border_radius_top_left: f32,
    pub border_radius_top_right: f32,
    pub border_radius_bottom_left: f32,
    pub border_radius_bottom_right: f32,
}

impl ResolvedStyle {
    /// Left + right padding
    pub fn padding_horizontal(&self) -> f32 {
        self.padding_left + self.padding_right
    }

    /// Top + bottom padding
    pub fn padding_vertical(&self) -> f32 {
        self.padding_top + self.padding_bottom
    }

    /// Main-axis gap for this container's direction
    pub fn main_gap(&self) -> f32 {
        match self.flex_direction {
            FlexDirection::Row => self.gap_row,
            FlexDirection::Column => self.gap_column,
        }
    }
}

/// Pick the most specific value from a shorthand chain, defaulting to zero.
fn fold(specific: Option<f32>, mid: Option<f32>, broad: Option<f32>) -> f32 {
    specific.or(mid).or(broad).unwrap_or(0.0)
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold shorthands into an explicit per-edge record.
    ///
    /// Pure: no tree knowledge, no side effects. Each property resolves
    /// independently through its own chain (most specific wins):
    /// `padding_left > padding_horizontal > padding > 0`, the same pattern
    /// for the other edges and for margins,
    /// `border_top_width > border_width > 0` per edge, and
    /// `border_radius_top_left > border_radius_top > border_radius > 0`
    /// per corner.
    ///
    /// # Panics
    /// Panics if `flex` is negative.
    pub fn resolve(&self) -> ResolvedStyle {
        if let Some(flex) = self.flex {
            assert!(
                flex >= 0.0,
                "Flex factor must be non-negative, got {flex}"
            );
        }

        ResolvedStyle {
            width: self.width.unwrap_or_default(),
            height: self.height.unwrap_or_default(),

            flex_direction: self.flex_direction.unwrap_or_default(),
            justify_content: self.justify_content.unwrap_or_default(),
            align_items: self.align_items.unwrap_or_default(),
            align_self: self.align_self,
            position: self.position.unwrap_or_default(),
            display: self.display.unwrap_or_default(),

            flex: self.flex,

            gap_row: self.gap_row.or(self.gap).unwrap_or(0.0),
            gap_column: self.gap_column.or(self.gap).unwrap_or(0.0),

            z_index: self.z_index,

            left: self.left,
            right: self.right,
            top: self.top,
            bottom: self.bottom,

            padding_left: fold(self.padding_left, self.padding_horizontal, self.padding),
            padding_right: fold(self.padding_right, self.padding_horizontal, self.padding),
            padding_top: fold(self.padding_top, self.padding_vertical, self.padding),
            padding_bottom: fold(self.padding_bottom, self.padding_vertical, self.padding),

            margin_left: fold(self.margin_left, self.margin_horizontal, self.margin),
            margin_right: fold(self.margin_right, self.margin_horizontal, self.margin),
            margin_top: fold(self.margin_top, self.margin_vertical, self.margin),
            margin_bottom: fold(self.margin_bottom, self.margin_vertical, self.margin),

            border_left_width: fold(self.border_left_width, None, self.border_width),
            border_right_width: fold(self.border_right_width, None, self.border_width),
            border_top_width: fold(self.border_top_width, None, self.border_width),
            border_bottom_width: fold(self.border_bottom_width, None, self.border_width),

            border_radius_top_left: fold(
                self.border_radius_top_left,
                self.border_radius_top,
                self.border_radius,
            ),
            border_radius_top_right: fold(
                self.border_radius_top_right,
                self.border_radius_top,
                self.border_radius,
            ),
            border_radius_bottom_left: fold(
                self.border_radius_bottom_left,
                self.border_radius_bottom,
                self.border_radius,
            ),
            border_radius_bottom_right: fold(
                self.border_radius_bottom_right,
                self.border_radius_bottom,
                self.border_radius,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_specificity() {
        let style = Style {
            padding: Some(4.0),
            padding_horizontal: Some(8.0),
            padding_left: Some(16.0),
            ..Default::default()
        };
        let resolved = style.resolve();

        assert_eq!(resolved.padding_left, 16.0);
        assert_eq!(resolved.padding_right, 8.0);
        assert_eq!(resolved.padding_top, 4.0);
        assert_eq!(resolved.padding_bottom, 4.0);
    }

    #[test]
    fn test_specificity_ignores_declaration_order() {
        // The broad shorthand never shadows the specific one, no matter how
        // the struct literal is written.
        let style = Style {
            margin_top: Some(2.0),
            margin: Some(10.0),
            ..Default::default()
        };
        let resolved = style.resolve();

        assert_eq!(resolved.margin_top, 2.0);
        assert_eq!(resolved.margin_left, 10.0);
    }

    #[test]
    fn test_unset_edges_default_to_zero() {
        let resolved = Style::new().resolve();
        assert_eq!(resolved.padding_left, 0.0);
        assert_eq!(resolved.margin_bottom, 0.0);
        assert_eq!(resolved.border_top_width, 0.0);
        assert_eq!(resolved.border_radius_bottom_right, 0.0);
    }

    #[test]
    fn test_border_radius_chain() {
        let style = Style {
            border_radius: Some(2.0),
            border_radius_top: Some(6.0),
            border_radius_top_left: Some(12.0),
            ..Default::default()
        };
        let resolved = style.resolve();

        assert_eq!(resolved.border_radius_top_left, 12.0);
        assert_eq!(resolved.border_radius_top_right, 6.0);
        assert_eq!(resolved.border_radius_bottom_left, 2.0);
        assert_eq!(resolved.border_radius_bottom_right, 2.0);
    }

    #[test]
    fn test_border_width_chain() {
        let style = Style {
            border_width: Some(1.0),
            border_top_width: Some(3.0),
            ..Default::default()
        };
        let resolved = style.resolve();

        assert_eq!(resolved.border_top_width, 3.0);
        assert_eq!(resolved.border_left_width, 1.0);
    }

    #[test]
    fn test_gap_specificity() {
        let style = Style {
            gap: Some(8.0),
            gap_row: Some(20.0),
            ..Default::default()
        };
        let resolved = style.resolve();

        assert_eq!(resolved.gap_row, 20.0);
        assert_eq!(resolved.gap_column, 8.0);
    }

    #[test]
    fn test_defaults() {
        let resolved = Style::new().resolve();
        assert_eq!(resolved.width, Size::Auto);
        assert_eq!(resolved.flex_direction, FlexDirection::Row);
        assert_eq!(resolved.justify_content, JustifyContent::Start);
        assert_eq!(resolved.align_items, AlignItems::Start);
        assert_eq!(resolved.align_self, None);
        assert_eq!(resolved.position, Position::Relative);
        assert_eq!(resolved.display, Display::Flex);
        assert_eq!(resolved.z_index, None);
        assert_eq!(resolved.flex, None);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_negative_flex_panics() {
        let style = Style {
            flex: Some(-1.0),
            ..Default::default()
        };
        let _ = style.resolve();
    }
}
