//! Forest builder.

use crate::flat::FlatForest;
use crate::forest::NodeId;

/// Forest builder.
///
/// `ForestBuilder` appends nodes in depth-first pre-order and remembers "the
/// current node", so the resulting sequences are valid by construction;
/// [`finish`][`ForestBuilder::finish`] never fails.
///
/// * [`root()`][`ForestBuilder::root`] starts a new tree and makes its root
///   the current node.
/// * [`child()`][`ForestBuilder::child`] appends a child (as the last child)
///   to the current node, and makes it the new current node.
/// * [`sibling()`][`ForestBuilder::sibling`] appends a next sibling of the
///   current node, and makes it the new current node.
/// * [`parent()`][`ForestBuilder::parent`] makes the parent the new current
///   node.
///
/// # Examples
///
/// ```
/// use flatforest::ForestBuilder;
///
/// let mut builder = ForestBuilder::new();
/// builder
///     .root(1)
///     .child(2)
///     .child(3)
///     .child(4)
///     .parent()
///     .parent()
///     .sibling(5)
///     .root(6)
///     .child(7);
///
/// // Forest:
/// //  1            6
/// //  +- 2         +- 7
/// //  |  +- 3
/// //  |     +- 4
/// //  +- 5
///
/// let forest = builder.finish();
/// assert_eq!(forest.ids(), &[1, 2, 3, 4, 5, 6, 7]);
/// assert_eq!(forest.depths(), &[0, 1, 2, 3, 1, 0, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ForestBuilder {
    /// Node IDs appended so far.
    ids: Vec<NodeId>,
    /// Node depths appended so far.
    depths: Vec<usize>,
    /// Depth of the current node.
    ///
    /// Meaningless while the builder is empty.
    current_depth: usize,
}

impl ForestBuilder {
    /// Creates a new empty builder.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes appended so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no node has been appended yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the depth of the current node, or `None` if the builder is
    /// empty.
    #[inline]
    #[must_use]
    pub fn current_depth(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.current_depth)
        }
    }

    /// Appends a new tree root, and changes the current node to it.
    pub fn root(&mut self, id: NodeId) -> &mut Self {
        self.ids.push(id);
        self.depths.push(0);
        self.current_depth = 0;
        self
    }

    /// Appends a child node to the current node, and changes the current
    /// node to it.
    ///
    /// # Panics
    ///
    /// Panics if the builder is empty, i.e. there is no current node.
    pub fn child(&mut self, id: NodeId) -> &mut Self {
        assert!(
            !self.is_empty(),
            "[precondition] the builder must contain a node to append a child to"
        );
        self.ids.push(id);
        self.depths.push(self.current_depth + 1);
        self.current_depth += 1;
        self
    }

    /// Appends a next sibling node of the current node, and changes the
    /// current node to it.
    ///
    /// When the current node is a tree root, the sibling is a new tree root,
    /// the same as [`root()`][`ForestBuilder::root`].
    ///
    /// # Panics
    ///
    /// Panics if the builder is empty, i.e. there is no current node.
    pub fn sibling(&mut self, id: NodeId) -> &mut Self {
        assert!(
            !self.is_empty(),
            "[precondition] the builder must contain a node to append a sibling to"
        );
        self.ids.push(id);
        self.depths.push(self.current_depth);
        self
    }

    /// Tries to change the current node to the parent of the current node.
    ///
    /// Returns `None` if the builder is empty or the current node is a tree
    /// root.
    pub fn try_parent(&mut self) -> Option<&mut Self> {
        if self.is_empty() || self.current_depth == 0 {
            return None;
        }
        self.current_depth -= 1;
        Some(self)
    }

    /// Changes the current node to the parent of the current node.
    ///
    /// # Panics
    ///
    /// Panics if the builder is empty or the current node is a tree root.
    pub fn parent(&mut self) -> &mut Self {
        self.try_parent()
            .expect("[precondition] the current node should not be a tree root")
    }

    /// Consumes the builder and returns the forest.
    ///
    /// Cursor movement only ever appends a root, a child of the current
    /// node, or a sibling of the current node, so the accumulated sequences
    /// always satisfy the structure rules.
    #[must_use]
    pub fn finish(self) -> FlatForest {
        FlatForest::from_parts_unchecked(self.ids, self.depths)
    }
}
