//! # planar
//!
//! A renderer-agnostic tree-layout engine: flexbox-style sizing and
//! positioning without a DOM. Build a tree of style-annotated nodes, hand it
//! a viewport and a text measurer, and every node gets an absolute pixel
//! rectangle plus a resolved stacking order for a paint stage to consume.
//!
//! ```
//! use glam::Vec2;
//! use planar::*;
//!
//! # struct Measurer;
//! # impl TextMeasurer for Measurer {
//! #     fn shape(&mut self, _request: ShapeRequest<'_>) -> ShapedText {
//! #         ShapedText::default()
//! #     }
//! # }
//! # let mut measurer = Measurer;
//! let mut tree = Tree::new();
//! let root = tree.container(Style {
//!     width: Some(Size::px(200.0)),
//!     height: Some(Size::px(100.0)),
//!     justify_content: Some(JustifyContent::Center),
//!     align_items: Some(AlignItems::Center),
//!     ..Default::default()
//! });
//! let badge = tree.container(Style {
//!     width: Some(Size::px(40.0)),
//!     height: Some(Size::px(20.0)),
//!     ..Default::default()
//! });
//! tree.append(root, badge);
//!
//! layout(&mut tree, root, &mut measurer, Vec2::new(1024.0, 768.0));
//! assert_eq!(tree.state(badge).x, 80.0);
//! assert_eq!(tree.state(badge).y, 40.0);
//! ```
//!
//! Text shaping, painting, and input handling live outside this crate; text
//! enters through the [`TextMeasurer`] trait and rectangles leave through
//! [`LayoutState`].

pub mod content;
pub mod engine;
pub mod layout;
pub mod measure;
pub mod node;
pub mod style;

pub use content::*;
pub use engine::*;
pub use layout::*;
pub use measure::*;
pub use node::*;
pub use style::*;
