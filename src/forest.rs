//! Forest access contract.

use crate::error::AccessError;

/// Node ID.
///
/// An opaque payload attached to every node. The crate never interprets IDs
/// beyond passing them to predicates and printing them; in particular they
/// are not required to be unique. Positions in the flat sequence, not IDs,
/// identify nodes.
pub type NodeId = i64;

/// Read access to a forest in depth-first pre-order.
///
/// A type implementing `Forest` exposes an ordered forest as a sequence of
/// `(id, depth)` pairs, listed in the order a depth-first walk visits them.
/// The parent of the node at index `i` is the nearest preceding index whose
/// depth is exactly one less; depth 0 marks a tree root.
///
/// Implementations must uphold the structure rules (see
/// [`FlatForest::from_parts`]): the first node (if any) has depth 0, and a
/// node is at most one level deeper than its predecessor. Free functions
/// such as [`filter()`] rely on these rules and have unspecified (but
/// memory safe) results when they are broken.
///
/// Accessors must be pure: repeated calls with the same index return the
/// same value, and no call mutates the forest.
///
/// [`FlatForest::from_parts`]: crate::FlatForest::from_parts
/// [`filter()`]: crate::filter()
pub trait Forest {
    /// Returns the number of nodes in the forest.
    #[must_use]
    fn len(&self) -> usize;

    /// Returns the ID of the node at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Use [`try_node_id`][`Self::try_node_id`]
    /// for checked access.
    #[must_use]
    fn node_id(&self, index: usize) -> NodeId;

    /// Returns the stored depth of the node at the given index.
    ///
    /// The depth is read back as stored, never recomputed.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Use [`try_depth`][`Self::try_depth`]
    /// for checked access.
    #[must_use]
    fn depth(&self, index: usize) -> usize;

    /// Returns true if the forest has no nodes.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the ID of the node at the given index, or an error if the
    /// index is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatforest::{AccessError, FlatForest, Forest};
    ///
    /// let forest = FlatForest::from_parts(vec![41, 42], vec![0, 1])?;
    ///
    /// assert_eq!(forest.try_node_id(1), Ok(42));
    /// assert_eq!(
    ///     forest.try_node_id(2),
    ///     Err(AccessError { index: 2, len: 2 })
    /// );
    /// # Ok::<_, flatforest::StructureError>(())
    /// ```
    fn try_node_id(&self, index: usize) -> Result<NodeId, AccessError> {
        if index < self.len() {
            Ok(self.node_id(index))
        } else {
            Err(AccessError {
                index,
                len: self.len(),
            })
        }
    }

    /// Returns the depth of the node at the given index, or an error if the
    /// index is out of range.
    fn try_depth(&self, index: usize) -> Result<usize, AccessError> {
        if index < self.len() {
            Ok(self.depth(index))
        } else {
            Err(AccessError {
                index,
                len: self.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flat::FlatForest;

    fn sample() -> FlatForest {
        FlatForest::from_parts(vec![10, 20, 30], vec![0, 1, 1])
            .expect("should never fail: the sample encoding is valid")
    }

    #[test]
    fn checked_access_in_range() {
        let forest = sample();
        assert_eq!(forest.try_node_id(0), Ok(10));
        assert_eq!(forest.try_depth(2), Ok(1));
    }

    #[test]
    fn checked_access_out_of_range() {
        let forest = sample();
        assert_eq!(forest.try_node_id(3), Err(AccessError { index: 3, len: 3 }));
        assert_eq!(forest.try_depth(100), Err(AccessError { index: 100, len: 3 }));
    }

    #[test]
    fn usable_as_trait_object() {
        fn total_depth(forest: &dyn Forest) -> usize {
            (0..forest.len()).map(|index| forest.depth(index)).sum()
        }

        assert_eq!(total_depth(&sample()), 2);
    }
}
