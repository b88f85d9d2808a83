//! Positional traversal over the flat encoding.
//!
//! Structure is derived from the depth sequence alone: the parent of a node
//! is the nearest preceding node one level up, and a subtree is a node
//! followed by the contiguous run of strictly deeper nodes. Every helper
//! here is a plain index scan; none of them allocates.
//!
//! Helpers taking a node index panic when the index is out of range, like
//! the unchecked accessors of [`Forest`].

use core::iter::FusedIterator;
use core::ops::Range;

use crate::forest::{Forest, NodeId};

/// Returns an iterator over `(id, depth)` pairs in storage order.
///
/// # Examples
///
/// ```
/// use flatforest::{traverse, FlatForest};
///
/// let forest = FlatForest::from_parts(vec![1, 2], vec![0, 1])?;
///
/// let pairs: Vec<_> = traverse::nodes(&forest).collect();
/// assert_eq!(pairs, &[(1, 0), (2, 1)]);
/// # Ok::<_, flatforest::StructureError>(())
/// ```
#[inline]
#[must_use]
pub fn nodes<F: Forest + ?Sized>(forest: &F) -> Nodes<'_, F> {
    Nodes {
        forest,
        range: 0..forest.len(),
    }
}

/// Returns an iterator over the indices of the tree roots.
///
/// Roots are found by jumping from each root to the end of its subtree, so
/// the iteration does not revisit inner nodes.
///
/// # Examples
///
/// ```
/// use flatforest::{traverse, FlatForest};
///
/// let forest = FlatForest::from_parts(vec![1, 2, 3], vec![0, 1, 0])?;
///
/// let roots: Vec<_> = traverse::roots(&forest).collect();
/// assert_eq!(roots, &[0, 2]);
/// # Ok::<_, flatforest::StructureError>(())
/// ```
#[inline]
#[must_use]
pub fn roots<F: Forest + ?Sized>(forest: &F) -> Roots<'_, F> {
    Roots { forest, next: 0 }
}

/// Returns the index range of the subtree rooted at the given index.
///
/// The range starts at the node itself and extends over its descendant
/// block, the contiguous run of following nodes that are strictly deeper.
/// This is the same range [`filter`][crate::filter()] jumps over when it
/// rejects a node.
///
/// # Panics
///
/// Panics if `index >= forest.len()`.
///
/// # Examples
///
/// ```
/// use flatforest::{traverse, FlatForest};
///
/// // 1
/// // +- 2
/// // |  +- 3
/// // +- 4
/// let forest = FlatForest::from_parts(vec![1, 2, 3, 4], vec![0, 1, 2, 1])?;
///
/// assert_eq!(traverse::subtree(&forest, 0), 0..4);
/// assert_eq!(traverse::subtree(&forest, 1), 1..3);
/// assert_eq!(traverse::subtree(&forest, 3), 3..4);
/// # Ok::<_, flatforest::StructureError>(())
/// ```
#[must_use]
pub fn subtree<F: Forest + ?Sized>(forest: &F, index: usize) -> Range<usize> {
    let len = forest.len();
    let depth = forest.depth(index);
    let mut end = index + 1;
    while end < len && forest.depth(end) > depth {
        end += 1;
    }

    index..end
}

/// Returns the index of the parent of the node at the given index.
///
/// The parent is the nearest preceding node at a smaller depth; under the
/// structure rules it sits exactly one level up. Roots have no parent.
///
/// # Panics
///
/// Panics if `index >= forest.len()`.
///
/// # Examples
///
/// ```
/// use flatforest::{traverse, FlatForest};
///
/// let forest = FlatForest::from_parts(vec![1, 2, 3], vec![0, 1, 1])?;
///
/// assert_eq!(traverse::parent(&forest, 2), Some(0));
/// assert_eq!(traverse::parent(&forest, 0), None);
/// # Ok::<_, flatforest::StructureError>(())
/// ```
#[must_use]
pub fn parent<F: Forest + ?Sized>(forest: &F, index: usize) -> Option<usize> {
    let depth = forest.depth(index);
    (0..index)
        .rev()
        .find(|&candidate| forest.depth(candidate) < depth)
}

/// Returns an iterator over the indices of the ancestors of the node,
/// nearest first.
///
/// The node itself is not included; iterating from a root yields nothing.
///
/// # Panics
///
/// Panics if `index >= forest.len()`.
///
/// # Examples
///
/// ```
/// use flatforest::{traverse, FlatForest};
///
/// let forest = FlatForest::from_parts(vec![1, 2, 3, 4], vec![0, 1, 2, 3])?;
///
/// let chain: Vec<_> = traverse::ancestors(&forest, 3).collect();
/// assert_eq!(chain, &[2, 1, 0]);
/// assert_eq!(traverse::ancestors(&forest, 0).count(), 0);
/// # Ok::<_, flatforest::StructureError>(())
/// ```
#[inline]
#[must_use]
pub fn ancestors<F: Forest + ?Sized>(forest: &F, index: usize) -> Ancestors<'_, F> {
    Ancestors {
        forest,
        next: parent(forest, index),
    }
}

/// Returns an iterator over the indices of the direct children of the node.
///
/// Each child's own subtree is jumped over, so grandchildren are not
/// visited.
///
/// # Panics
///
/// Panics if `index >= forest.len()`.
///
/// # Examples
///
/// ```
/// use flatforest::{traverse, FlatForest};
///
/// // 1
/// // +- 2
/// // |  +- 3
/// // +- 4
/// //    +- 5
/// let forest = FlatForest::from_parts(vec![1, 2, 3, 4, 5], vec![0, 1, 2, 1, 2])?;
///
/// let children: Vec<_> = traverse::children(&forest, 0).collect();
/// assert_eq!(children, &[1, 3]);
/// assert_eq!(traverse::children(&forest, 2).count(), 0);
/// # Ok::<_, flatforest::StructureError>(())
/// ```
#[must_use]
pub fn children<F: Forest + ?Sized>(forest: &F, index: usize) -> Children<'_, F> {
    Children {
        forest,
        child_depth: forest.depth(index) + 1,
        next: index + 1,
    }
}

/// Iterator over `(id, depth)` pairs in storage order.
///
/// See [`nodes`].
#[derive(Debug, Clone)]
pub struct Nodes<'a, F: ?Sized> {
    /// Forest.
    forest: &'a F,
    /// Remaining index range.
    range: Range<usize>,
}

impl<F: Forest + ?Sized> Iterator for Nodes<'_, F> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;
        Some((self.forest.node_id(index), self.forest.depth(index)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<F: Forest + ?Sized> DoubleEndedIterator for Nodes<'_, F> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.range.next_back()?;
        Some((self.forest.node_id(index), self.forest.depth(index)))
    }
}

impl<F: Forest + ?Sized> ExactSizeIterator for Nodes<'_, F> {}

impl<F: Forest + ?Sized> FusedIterator for Nodes<'_, F> {}

/// Iterator over the indices of the tree roots.
///
/// See [`roots`].
#[derive(Debug, Clone)]
pub struct Roots<'a, F: ?Sized> {
    /// Forest.
    forest: &'a F,
    /// Index of the next root candidate.
    next: usize,
}

impl<F: Forest + ?Sized> Iterator for Roots<'_, F> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.forest.len() {
            return None;
        }
        let index = self.next;
        debug_assert_eq!(
            self.forest.depth(index),
            0,
            "[consistency] root subtrees must tile the whole sequence"
        );
        self.next = subtree(self.forest, index).end;

        Some(index)
    }
}

impl<F: Forest + ?Sized> FusedIterator for Roots<'_, F> {}

/// Iterator over the indices of the ancestors of a node, nearest first.
///
/// See [`ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a, F: ?Sized> {
    /// Forest.
    forest: &'a F,
    /// Position of the next ancestor to yield.
    next: Option<usize>,
}

impl<F: Forest + ?Sized> Iterator for Ancestors<'_, F> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        self.next = parent(self.forest, index);

        Some(index)
    }
}

impl<F: Forest + ?Sized> FusedIterator for Ancestors<'_, F> {}

/// Iterator over the indices of the direct children of a node.
///
/// See [`children`].
#[derive(Debug, Clone)]
pub struct Children<'a, F: ?Sized> {
    /// Forest.
    forest: &'a F,
    /// Depth the children live at.
    child_depth: usize,
    /// Index of the next candidate position.
    next: usize,
}

impl<F: Forest + ?Sized> Iterator for Children<'_, F> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.forest.len() || self.forest.depth(self.next) < self.child_depth {
            return None;
        }
        let index = self.next;
        self.next = subtree(self.forest, index).end;

        Some(index)
    }
}

impl<F: Forest + ?Sized> FusedIterator for Children<'_, F> {}
