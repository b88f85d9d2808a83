//! Errors.

use thiserror::Error;

/// Structure violation found while building a forest from raw sequences.
///
/// The flat encoding is only meaningful when the depth sequence describes a
/// depth-first pre-order walk. [`FlatForest::from_parts`] checks the rules
/// below and reports the first violation; nothing is constructed on failure.
///
/// [`FlatForest::from_parts`]: crate::FlatForest::from_parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructureError {
    /// The ID sequence and the depth sequence have different lengths.
    #[error("ids and depths have different lengths ({ids} ids, {depths} depths)")]
    LengthMismatch {
        /// Length of the ID sequence.
        ids: usize,
        /// Length of the depth sequence.
        depths: usize,
    },
    /// The first node is not at depth 0.
    ///
    /// A depth-first walk has nothing to descend from before the first node,
    /// so a non-empty forest must start with a tree root.
    #[error("first node has depth {depth}, expected a root at depth 0")]
    FirstNodeNotRoot {
        /// Depth of the first node.
        depth: usize,
    },
    /// A node is more than one level deeper than its predecessor.
    ///
    /// Such a node would have no parent: the parent of a node at depth `d`
    /// is the nearest preceding node at depth `d - 1`.
    #[error("depth at index {index} jumps from {prev} to {next}")]
    DepthJump {
        /// Index of the offending node.
        index: usize,
        /// Depth of the preceding node.
        prev: usize,
        /// Depth of the offending node.
        next: usize,
    },
}

/// Checked access to a node index that is out of range.
///
/// Returned by [`Forest::try_node_id`] and [`Forest::try_depth`]. The
/// unchecked accessors panic instead; see their documentation.
///
/// [`Forest::try_node_id`]: crate::Forest::try_node_id
/// [`Forest::try_depth`]: crate::Forest::try_depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for a forest of {len} nodes")]
pub struct AccessError {
    /// Requested node index.
    pub index: usize,
    /// Number of nodes in the forest.
    pub len: usize,
}
