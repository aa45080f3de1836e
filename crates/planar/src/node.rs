use glam::Vec2;

use crate::content::{Content, TextContent};
use crate::layout::LayoutState;
use crate::style::{ResolvedStyle, Style};

/// Handle to a node in a [`Tree`].
///
/// Plain index, `Copy`, only meaningful for the tree that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single node: resolved style, optional leaf content, tree links, and the
/// layout output slot.
#[derive(Debug, Clone)]
pub struct Node {
    pub style: ResolvedStyle,
    pub content: Option<Content>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Computed rectangle, filled in by `layout()`
    pub state: LayoutState,
    /// Measured text bounds from the seed pass; `None` for containers
    pub(crate) measured: Option<Vec2>,
}

impl Node {
    fn new(style: ResolvedStyle, content: Option<Content>) -> Self {
        Self {
            style,
            content,
            parent: None,
            children: Vec::new(),
            state: LayoutState::ZERO,
            measured: None,
        }
    }

    /// Whether this node is a text leaf
    pub fn is_text(&self) -> bool {
        matches!(self.content, Some(Content::Text(_)))
    }
}

/// Arena of nodes addressed by [`NodeId`].
///
/// Construction is explicit: create nodes with [`container`](Tree::container)
/// or [`text`](Tree::text), then link them with [`append`](Tree::append).
/// Structural misuse (attaching a child twice, parenting under a text leaf)
/// is a programmer error and panics immediately rather than producing a
/// half-linked tree.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
}

impl Tree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop all nodes, keeping the allocation for reuse. All previously
    /// issued [`NodeId`]s become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Create an unattached container node
    pub fn container(&mut self, style: Style) -> NodeId {
        self.push(Node::new(style.resolve(), None))
    }

    /// Create an unattached text leaf
    ///
    /// # Panics
    /// Panics if the font family is empty.
    pub fn text(&mut self, style: Style, content: TextContent) -> NodeId {
        assert!(
            !content.font.is_empty(),
            "Text node requires a font family"
        );
        self.push(Node::new(style.resolve(), Some(Content::Text(content))))
    }

    /// Attach `child` under `parent`, after any existing children.
    ///
    /// # Panics
    /// Panics if either id is stale, if `child` already has a parent, if
    /// `parent` is a text leaf, or if `parent == child`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        assert!(parent.index() < self.nodes.len(), "Invalid parent id");
        assert!(child.index() < self.nodes.len(), "Invalid child id");
        assert_ne!(parent, child, "Cannot append a node to itself");
        assert!(
            !self.node(parent).is_text(),
            "Cannot add children to a text node"
        );
        assert!(
            self.node(child).parent.is_none(),
            "Child already has a parent"
        );

        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
    }

    /// Borrow a node
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Mutably borrow a node
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Computed rectangle of a node (valid after `layout()`)
    pub fn state(&self, id: NodeId) -> LayoutState {
        self.nodes[id.index()].state
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_links_both_directions() {
        let mut tree = Tree::new();
        let root = tree.container(Style::new());
        let a = tree.container(Style::new());
        let b = tree.container(Style::new());
        tree.append(root, a);
        tree.append(root, b);

        assert_eq!(tree.node(root).children, vec![a, b]);
        assert_eq!(tree.node(a).parent, Some(root));
        assert_eq!(tree.node(b).parent, Some(root));
    }

    #[test]
    #[should_panic(expected = "already has a parent")]
    fn test_double_append_panics() {
        let mut tree = Tree::new();
        let root = tree.container(Style::new());
        let other = tree.container(Style::new());
        let child = tree.container(Style::new());
        tree.append(root, child);
        tree.append(other, child);
    }

    #[test]
    #[should_panic(expected = "Cannot add children to a text node")]
    fn test_text_leaf_rejects_children_panics() {
        let mut tree = Tree::new();
        let leaf = tree.text(Style::new(), TextContent::new("label"));
        let child = tree.container(Style::new());
        tree.append(leaf, child);
    }

    #[test]
    #[should_panic(expected = "font family")]
    fn test_empty_font_panics() {
        let mut tree = Tree::new();
        let _ = tree.text(Style::new(), TextContent::new("label").with_font(""));
    }

    #[test]
    fn test_clear_resets_and_reuses() {
        let mut tree = Tree::new();
        let _ = tree.container(Style::new());
        let _ = tree.container(Style::new());
        assert_eq!(tree.len(), 2);

        tree.clear();
        assert!(tree.is_empty());

        let root = tree.container(Style::new());
        assert_eq!(root, NodeId(0));
    }
}
