//! The three-pass layout algorithm.
//!
//! Pass 1 (seed, top-down) resolves explicit and percent sizes against the
//! parent as currently known and measures text leaves. Pass 2 (hug,
//! bottom-up) sizes `Auto` dimensions from children. Pass 3 (resolve,
//! top-down) corrects percentages, applies offsets and alignment,
//! distributes flexible space, places children along the main axis and
//! rounds every rectangle to whole pixels.
//!
//! Traversal is queue-driven, so stack depth does not grow with tree depth,
//! and the whole computation is deterministic and idempotent.

use std::collections::VecDeque;

use glam::Vec2;
use log::{debug, trace};

use crate::content::Content;
use crate::layout::{AlignItems, Display, FlexDirection, JustifyContent, LayoutState, Position, Size};
use crate::measure::{ShapeRequest, TextMeasurer};
use crate::node::{Node, NodeId, Tree};
use crate::style::{ResolvedStyle, Style};

/// Compute the rectangle and stacking order of every node under `root`.
///
/// Mutates each node's [`LayoutState`] in place; rectangles are rounded to
/// whole pixels and sizes are non-negative. Calling this repeatedly with
/// unchanged inputs produces bit-identical output.
///
/// A synthetic viewport-sized node briefly parents `root` for the duration
/// of the call, so the root's own percent sizes and offsets resolve against
/// the viewport. The caller's tree is structurally unchanged on return.
///
/// # Panics
/// Panics if `root` is stale or already has a parent.
pub fn layout(tree: &mut Tree, root: NodeId, measurer: &mut dyn TextMeasurer, viewport: Vec2) {
    assert!(root.index() < tree.len(), "Invalid root id");
    assert!(
        tree.node(root).parent.is_none(),
        "Layout root must not have a parent"
    );

    debug!(
        "layout: {} nodes, viewport {}x{}",
        tree.len(),
        viewport.x,
        viewport.y
    );

    let synthetic = tree.container(Style {
        width: Some(Size::px(viewport.x)),
        height: Some(Size::px(viewport.y)),
        ..Default::default()
    });
    tree.append(synthetic, root);

    let order = breadth_first(tree, synthetic);
    seed(tree, &order, measurer);
    hug(tree, &order);
    resolve(tree, &order);

    tree.node_mut(root).parent = None;
    tree.nodes.pop();
}

/// BFS order starting at `start`; parents always precede their children.
fn breadth_first(tree: &Tree, start: NodeId) -> Vec<NodeId> {
    let mut order = Vec::with_capacity(tree.len());
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some(id) = queue.pop_front() {
        order.push(id);
        queue.extend(tree.node(id).children.iter().copied());
    }
    order
}

/// Pass 1: zero every state, set explicit sizes, take a first cut at
/// percentages, and measure text leaves.
///
/// Percent sizes resolve against the parent's pass-1 size as currently
/// known, which is still zero under an `Auto` ancestor; pass 3 corrects
/// them. Text is measured with whatever wrap width the parent currently
/// has (possibly zero), deliberately uncorrected.
fn seed(tree: &mut Tree, order: &[NodeId], measurer: &mut dyn TextMeasurer) {
    trace!("pass 1: seed ({} nodes)", order.len());
    for &id in order {
        let (parent_width, parent_height, parent_padding_h) = match tree.node(id).parent {
            Some(parent) => {
                let parent = tree.node(parent);
                (
                    parent.state.width,
                    parent.state.height,
                    parent.style.padding_horizontal(),
                )
            }
            None => (0.0, 0.0, 0.0),
        };

        let node = tree.node_mut(id);
        node.state = LayoutState::ZERO;
        node.measured = None;

        if let Some(width) = node.style.width.try_resolve(parent_width) {
            node.state.width = width;
        }
        if let Some(height) = node.style.height.try_resolve(parent_height) {
            node.state.height = height;
        }

        let auto_height = node.style.height.is_auto();
        if let Some(Content::Text(text)) = &node.content {
            let shaped = measurer.shape(ShapeRequest {
                font: &text.font,
                font_size: text.font_size,
                line_height: text.line_height,
                text: &text.text,
                align: text.align,
                max_width: parent_width - parent_padding_h,
                no_wrap: text.no_wrap,
            });
            if auto_height {
                node.state.height = shaped.bounds.y;
            }
            node.measured = Some(shaped.bounds);
        }
    }
}

fn is_in_flow(node: &Node) -> bool {
    node.style.position == Position::Relative && node.style.display == Display::Flex
}

fn main_size(direction: FlexDirection, state: &LayoutState) -> f32 {
    match direction {
        FlexDirection::Row => state.width,
        FlexDirection::Column => state.height,
    }
}

fn main_margins(direction: FlexDirection, style: &ResolvedStyle) -> f32 {
    match direction {
        FlexDirection::Row => style.margin_left + style.margin_right,
        FlexDirection::Column => style.margin_top + style.margin_bottom,
    }
}

/// Pass 2: size `Auto` dimensions from content, children before parents.
///
/// Along the main axis a container sums its in-flow children's outer sizes
/// plus gaps; along the cross axis it takes the max. Absolute and
/// `display: None` children never contribute. The strict bottom-up order is
/// what lets hug sizing compose at any nesting depth.
fn hug(tree: &mut Tree, order: &[NodeId]) {
    trace!("pass 2: hug");
    for &id in order.iter().rev() {
        let node = tree.node(id);
        let auto_width = node.style.width.is_auto();
        let auto_height = node.style.height.is_auto();
        if !auto_width && !auto_height {
            continue;
        }

        if let Some(bounds) = node.measured {
            let node = tree.node_mut(id);
            if auto_width {
                node.state.width = bounds.x;
            }
            if auto_height {
                node.state.height = bounds.y;
            }
            continue;
        }

        let style = node.style.clone();
        let children: Vec<NodeId> = node
            .children
            .iter()
            .copied()
            .filter(|&child| is_in_flow(tree.node(child)))
            .collect();

        let mut main = 0.0;
        let mut cross: f32 = 0.0;
        for &child in &children {
            let child = tree.node(child);
            let outer_w = child.state.width + child.style.margin_left + child.style.margin_right;
            let outer_h = child.state.height + child.style.margin_top + child.style.margin_bottom;
            let (m, c) = match style.flex_direction {
                FlexDirection::Row => (outer_w, outer_h),
                FlexDirection::Column => (outer_h, outer_w),
            };
            main += m;
            cross = cross.max(c);
        }
        if children.len() > 1 {
            main += (children.len() - 1) as f32 * style.main_gap();
        }

        let (content_w, content_h) = match style.flex_direction {
            FlexDirection::Row => (main, cross),
            FlexDirection::Column => (cross, main),
        };

        let node = tree.node_mut(id);
        if auto_width {
            node.state.width = content_w + style.padding_horizontal();
        }
        if auto_height {
            node.state.height = content_h + style.padding_vertical();
        }
    }
}

/// Pass 3: top-down. Each node corrects its own percent sizes, applies its
/// offsets and `align_self`, inherits its z-index, then resolves and places
/// its children, and finally rounds itself.
///
/// Children are placed from the parent's unrounded coordinates and round
/// themselves when visited, so rounding error does not cancel across
/// siblings. Preserved behavior.
fn resolve(tree: &mut Tree, order: &[NodeId]) {
    trace!("pass 3: resolve");
    for &id in order {
        resolve_self(tree, id);
        resolve_children(tree, id);
        round(tree, id);
    }
}

/// Percent re-resolution, offsets, `align_self` and z-index for one node.
fn resolve_self(tree: &mut Tree, id: NodeId) {
    let parent_id = match tree.node(id).parent {
        Some(parent) => parent,
        None => {
            let node = tree.node_mut(id);
            node.state.z_index = node.style.z_index.unwrap_or(0);
            return;
        }
    };
    let parent = tree.node(parent_id);
    let parent_state = parent.state;
    let parent_style = parent.style.clone();

    let style = tree.node(id).style.clone();
    let absolute = style.position == Position::Absolute;

    {
        let state = &mut tree.node_mut(id).state;

        if let Size::Percent(pct) = style.width {
            state.width = pct / 100.0 * parent_state.width;
        }
        if let Size::Percent(pct) = style.height {
            state.height = pct / 100.0 * parent_state.height;
        }

        match (style.left, style.right) {
            // Stretch between both edges only when the width is unspecified
            (Some(left), Some(right)) if style.width.is_auto() => {
                state.x = parent_state.x + left;
                state.width = parent_state.width - left - right;
            }
            (Some(left), _) => {
                if absolute {
                    state.x = parent_state.x + left;
                } else {
                    state.x += left;
                }
            }
            (None, Some(right)) => {
                if absolute {
                    state.x = parent_state.x + parent_state.width - right - state.width;
                } else {
                    state.x -= right;
                }
            }
            (None, None) => {
                if absolute {
                    state.x = parent_state.x;
                }
            }
        }
        match (style.top, style.bottom) {
            (Some(top), Some(bottom)) if style.height.is_auto() => {
                state.y = parent_state.y + top;
                state.height = parent_state.height - top - bottom;
            }
            (Some(top), _) => {
                if absolute {
                    state.y = parent_state.y + top;
                } else {
                    state.y += top;
                }
            }
            (None, Some(bottom)) => {
                if absolute {
                    state.y = parent_state.y + parent_state.height - bottom - state.height;
                } else {
                    state.y -= bottom;
                }
            }
            (None, None) => {
                if absolute {
                    state.y = parent_state.y;
                }
            }
        }
    }

    if !absolute {
        if let Some(align) = style.align_self {
            let mut state = tree.node(id).state;
            align_cross(align, &parent_state, &parent_style, &style, &mut state);
            tree.node_mut(id).state = state;
        }
    }

    let node = tree.node_mut(id);
    node.state.z_index = node.style.z_index.unwrap_or(parent_state.z_index);
}

/// Percent propagation, flex distribution, main-axis placement and
/// `align_items` for one node's children.
fn resolve_children(tree: &mut Tree, id: NodeId) {
    let node = tree.node(id);
    if node.children.is_empty() {
        return;
    }
    let style = node.style.clone();
    let state = node.state;
    let children = node.children.clone();

    // Percent children against this node's now-final size. Applies to
    // absolute children too.
    for &child in &children {
        let child = tree.node_mut(child);
        if let Size::Percent(pct) = child.style.width {
            child.state.width = pct / 100.0 * state.width;
        }
        if let Size::Percent(pct) = child.style.height {
            child.state.height = pct / 100.0 * state.height;
        }
    }

    let in_flow: Vec<NodeId> = children
        .iter()
        .copied()
        .filter(|&child| is_in_flow(tree.node(child)))
        .collect();
    if in_flow.is_empty() {
        return;
    }

    let direction = style.flex_direction;
    let gap = style.main_gap();
    let spaced = style.justify_content.is_spaced();
    let content_main = match direction {
        FlexDirection::Row => state.width - style.padding_horizontal(),
        FlexDirection::Column => state.height - style.padding_vertical(),
    };

    // Flexible space distribution. The Space* variants synthesize their own
    // spacing from the free space, so flex is ignored under them entirely.
    if !spaced {
        let total_flex: f32 = in_flow
            .iter()
            .map(|&child| tree.node(child).style.flex.unwrap_or(0.0))
            .sum();
        if total_flex > 0.0 {
            let mut available = content_main - (in_flow.len() - 1) as f32 * gap;
            for &child in &in_flow {
                let child = tree.node(child);
                available -= main_margins(direction, &child.style);
                if child.style.flex.is_none() {
                    available -= main_size(direction, &child.state);
                }
            }
            for &child in &in_flow {
                let child = tree.node_mut(child);
                if let Some(flex) = child.style.flex {
                    let share = (flex / total_flex * available).max(0.0);
                    match direction {
                        FlexDirection::Row => child.state.width = share,
                        FlexDirection::Column => child.state.height = share,
                    }
                }
            }
        }
    }

    // Main-axis placement
    let outer_sum: f32 = in_flow
        .iter()
        .map(|&child| {
            let child = tree.node(child);
            main_size(direction, &child.state) + main_margins(direction, &child.style)
        })
        .sum();
    let free = if spaced {
        content_main - outer_sum
    } else {
        content_main - outer_sum - (in_flow.len() - 1) as f32 * gap
    };
    let count = in_flow.len() as f32;
    let (leading, between) = match style.justify_content {
        JustifyContent::Start => (0.0, gap),
        JustifyContent::Center => (free / 2.0, gap),
        JustifyContent::End => (free, gap),
        JustifyContent::SpaceBetween => {
            if in_flow.len() > 1 {
                (0.0, free / (count - 1.0))
            } else {
                (0.0, 0.0)
            }
        }
        JustifyContent::SpaceAround => {
            let step = free / count;
            (step / 2.0, step)
        }
        JustifyContent::SpaceEvenly => {
            let step = free / (count + 1.0);
            (step, step)
        }
    };

    let content_x = state.x + style.padding_left;
    let content_y = state.y + style.padding_top;
    let mut cursor = match direction {
        FlexDirection::Row => content_x,
        FlexDirection::Column => content_y,
    } + leading;
    for &child in &in_flow {
        let child = tree.node_mut(child);
        match direction {
            FlexDirection::Row => {
                cursor += child.style.margin_left;
                child.state.x = cursor;
                child.state.y = content_y + child.style.margin_top;
                cursor += child.state.width + child.style.margin_right + between;
            }
            FlexDirection::Column => {
                cursor += child.style.margin_top;
                child.state.y = cursor;
                child.state.x = content_x + child.style.margin_left;
                cursor += child.state.height + child.style.margin_bottom + between;
            }
        }
    }

    // Cross-axis alignment; a child's own align_self wins and is applied
    // when that child is visited.
    if style.align_items != AlignItems::Start {
        for &child_id in &in_flow {
            let child = tree.node(child_id);
            if child.style.align_self.is_some() {
                continue;
            }
            let child_style = child.style.clone();
            let mut child_state = child.state;
            align_cross(style.align_items, &state, &style, &child_style, &mut child_state);
            tree.node_mut(child_id).state = child_state;
        }
    }
}

/// Align one node along the cross axis of its parent's direction.
///
/// `Stretch` only replaces a dimension whose style is `Auto`; an explicit
/// size is never overridden.
fn align_cross(
    align: AlignItems,
    parent_state: &LayoutState,
    parent_style: &ResolvedStyle,
    style: &ResolvedStyle,
    state: &mut LayoutState,
) {
    match parent_style.flex_direction {
        FlexDirection::Row => {
            let content_y = parent_state.y + parent_style.padding_top;
            let content_h = parent_state.height - parent_style.padding_vertical();
            let outer = state.height + style.margin_top + style.margin_bottom;
            match align {
                AlignItems::Start => {}
                AlignItems::Center => {
                    state.y = content_y + (content_h - outer) / 2.0 + style.margin_top;
                }
                AlignItems::End => {
                    state.y = content_y + content_h - state.height - style.margin_bottom;
                }
                AlignItems::Stretch => {
                    if style.height.is_auto() {
                        state.height =
                            (content_h - style.margin_top - style.margin_bottom).max(0.0);
                    }
                }
            }
        }
        FlexDirection::Column => {
            let content_x = parent_state.x + parent_style.padding_left;
            let content_w = parent_state.width - parent_style.padding_horizontal();
            let outer = state.width + style.margin_left + style.margin_right;
            match align {
                AlignItems::Start => {}
                AlignItems::Center => {
                    state.x = content_x + (content_w - outer) / 2.0 + style.margin_left;
                }
                AlignItems::End => {
                    state.x = content_x + content_w - state.width - style.margin_right;
                }
                AlignItems::Stretch => {
                    if style.width.is_auto() {
                        state.width =
                            (content_w - style.margin_left - style.margin_right).max(0.0);
                    }
                }
            }
        }
    }
}

/// Round a node's rectangle to whole pixels, clamping sizes at zero.
fn round(tree: &mut Tree, id: NodeId) {
    let state = &mut tree.node_mut(id).state;
    state.x = state.x.round();
    state.y = state.y.round();
    state.width = state.width.max(0.0).round();
    state.height = state.height.max(0.0).round();
}
