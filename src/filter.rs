//! Ancestor-preserving filtering.

use crate::flat::FlatForest;
use crate::forest::{Forest, NodeId};
use crate::traverse::subtree;

/// Keeps the nodes whose IDs pass the predicate, together with their whole
/// ancestor chains.
///
/// A node survives exactly when the predicate accepts its ID *and* the ID of
/// every ancestor up to its tree root. Equivalently, rejecting a node prunes
/// the node and its entire subtree. Surviving nodes keep their original
/// depths and relative order, so the result is again a valid forest
/// encoding, assembled without re-deriving depths.
///
/// The pass runs in a single left-to-right scan with no recursion. When a
/// node is rejected, the scan jumps over its descendant block (the following
/// run of strictly deeper nodes); the predicate is never called for nodes
/// inside a skipped block. For nodes that are visited, calls happen in index
/// order, at most once per node. Time is `O(len)`, and the output buffers
/// are reserved at input length up front.
///
/// If the predicate panics, the panic propagates and the partial output is
/// dropped.
///
/// # Examples
///
/// ```
/// use flatforest::{filter, FlatForest};
///
/// // 1            6        8
/// // +- 2         +- 7     +- 9
/// // |  +- 3               +- 10
/// // |     +- 4               +- 11
/// // +- 5
/// let forest = FlatForest::from_parts(
///     vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
///     vec![0, 1, 2, 3, 1, 0, 1, 0, 1, 1, 2],
/// )?;
///
/// // Rejecting 3 prunes 4 with it; rejecting the root 6 prunes its
/// // whole tree; rejecting 9 leaves its siblings alone.
/// let kept = filter(&forest, |id| id % 3 != 0);
///
/// assert_eq!(kept.ids(), &[1, 2, 5, 8, 10, 11]);
/// assert_eq!(kept.depths(), &[0, 1, 1, 0, 1, 2]);
/// # Ok::<_, flatforest::StructureError>(())
/// ```
///
/// IDs carry no structural meaning, so a predicate that accepts everything
/// copies the forest and one that rejects everything drains it.
///
/// ```
/// use flatforest::{filter, FlatForest};
///
/// let forest = FlatForest::from_parts(vec![1, 2], vec![0, 1])?;
///
/// assert_eq!(filter(&forest, |_| true), forest);
/// assert!(filter(&forest, |_| false).is_empty());
/// # Ok::<_, flatforest::StructureError>(())
/// ```
#[must_use]
pub fn filter<F, P>(forest: &F, mut predicate: P) -> FlatForest
where
    F: Forest + ?Sized,
    P: FnMut(NodeId) -> bool,
{
    let len = forest.len();
    let mut ids = Vec::with_capacity(len);
    let mut depths = Vec::with_capacity(len);

    let mut index = 0;
    while index < len {
        let id = forest.node_id(index);
        if predicate(id) {
            ids.push(id);
            depths.push(forest.depth(index));
            index += 1;
        } else {
            index = subtree(forest, index).end;
        }
    }

    // Dropping depth-bounded blocks from a pre-order encoding leaves a
    // pre-order encoding, so no re-validation is needed here.
    FlatForest::from_parts_unchecked(ids, depths)
}
