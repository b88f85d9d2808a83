//! Array-backed forest.

use core::fmt;

use crate::display::display;
use crate::error::StructureError;
use crate::forest::{Forest, NodeId};

/// Checks that the parallel sequences encode a forest.
fn validate(ids: &[NodeId], depths: &[usize]) -> Result<(), StructureError> {
    if ids.len() != depths.len() {
        return Err(StructureError::LengthMismatch {
            ids: ids.len(),
            depths: depths.len(),
        });
    }
    if let Some(&first) = depths.first() {
        if first != 0 {
            return Err(StructureError::FirstNodeNotRoot { depth: first });
        }
    }
    for (index, pair) in depths.windows(2).enumerate() {
        if pair[1].saturating_sub(pair[0]) > 1 {
            return Err(StructureError::DepthJump {
                index: index + 1,
                prev: pair[0],
                next: pair[1],
            });
        }
    }

    Ok(())
}

/// Forest stored as two parallel vectors.
///
/// `ids[i]` and `depths[i]` describe the node at index `i`; indices follow
/// depth-first pre-order. The storage is immutable once constructed: new
/// shapes are produced by building new values (see [`filter()`] and
/// [`ForestBuilder`]), never by mutating an existing one.
///
/// Two forests are equal when their ID and depth sequences are equal, which
/// is the same as their [`Display`][`fmt::Display`] strings being equal.
///
/// # Examples
///
/// ```
/// use flatforest::{FlatForest, Forest};
///
/// // 1           (depth 0)
/// // +- 2        (depth 1)
/// // |  +- 3     (depth 2)
/// // +- 4        (depth 1)
/// let forest = FlatForest::from_parts(vec![1, 2, 3, 4], vec![0, 1, 2, 1])?;
///
/// assert_eq!(forest.len(), 4);
/// assert_eq!(forest.node_id(2), 3);
/// assert_eq!(forest.depth(2), 2);
/// assert_eq!(forest.to_string(), "[1:0, 2:1, 3:2, 4:1]");
/// # Ok::<_, flatforest::StructureError>(())
/// ```
///
/// [`filter()`]: crate::filter()
/// [`ForestBuilder`]: crate::ForestBuilder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlatForest {
    /// Node IDs in depth-first pre-order.
    ids: Vec<NodeId>,
    /// Node depths, parallel to `ids`.
    depths: Vec<usize>,
}

impl FlatForest {
    /// Creates a new empty forest.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatforest::{FlatForest, Forest};
    ///
    /// let forest = FlatForest::new();
    /// assert!(forest.is_empty());
    /// assert_eq!(forest.to_string(), "[]");
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a forest from an ID sequence and a depth sequence.
    ///
    /// The sequences are validated before anything is constructed, so an
    /// `Err` never leaves a half-built forest behind. The rules are those of
    /// a depth-first pre-order walk:
    ///
    /// * both sequences have the same length,
    /// * the first node (if any) has depth 0,
    /// * every node is at most one level deeper than its predecessor.
    ///
    /// Negative depths are unrepresentable by the types.
    ///
    /// # Errors
    ///
    /// * [`StructureError::LengthMismatch`] if the sequences differ in length.
    /// * [`StructureError::FirstNodeNotRoot`] if the first depth is not 0.
    /// * [`StructureError::DepthJump`] if a depth increases by more than one.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatforest::{FlatForest, StructureError};
    ///
    /// assert!(FlatForest::from_parts(vec![1, 2], vec![0, 1]).is_ok());
    ///
    /// // A node two levels deeper than its predecessor has no parent.
    /// assert_eq!(
    ///     FlatForest::from_parts(vec![1, 2], vec![0, 2]),
    ///     Err(StructureError::DepthJump {
    ///         index: 1,
    ///         prev: 0,
    ///         next: 2,
    ///     })
    /// );
    /// ```
    pub fn from_parts(ids: Vec<NodeId>, depths: Vec<usize>) -> Result<Self, StructureError> {
        validate(&ids, &depths)?;

        Ok(Self { ids, depths })
    }

    /// Creates a forest from sequences that are already known to be valid.
    ///
    /// This is intended for callers that produce the sequences by
    /// construction, such as [`filter()`] and [`ForestBuilder`], where
    /// re-validation would only re-derive what the producer already
    /// guarantees.
    ///
    /// # Panics
    ///
    /// Debug builds still validate and panic on malformed input. Release
    /// builds skip the check; the resulting forest then violates the
    /// documented structure rules and operations on it have unspecified
    /// (but memory safe) results.
    ///
    /// [`filter()`]: crate::filter()
    /// [`ForestBuilder`]: crate::ForestBuilder
    #[must_use]
    pub fn from_parts_unchecked(ids: Vec<NodeId>, depths: Vec<usize>) -> Self {
        #[cfg(debug_assertions)]
        if let Err(err) = validate(&ids, &depths) {
            panic!("[precondition] sequences must encode a forest: {err}");
        }

        Self { ids, depths }
    }

    /// Returns the node IDs in depth-first pre-order.
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Returns the node depths, parallel to [`ids`][`Self::ids`].
    #[inline]
    #[must_use]
    pub fn depths(&self) -> &[usize] {
        &self.depths
    }

    /// Returns the number of nodes in the forest.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the forest has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Decomposes the forest back into its ID and depth vectors.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Vec<NodeId>, Vec<usize>) {
        (self.ids, self.depths)
    }
}

impl Forest for FlatForest {
    #[inline]
    fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    fn node_id(&self, index: usize) -> NodeId {
        self.ids[index]
    }

    #[inline]
    fn depth(&self, index: usize) -> usize {
        self.depths[index]
    }
}

impl fmt::Display for FlatForest {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&display(self), f)
    }
}

/// Deserialization routes through [`FlatForest::from_parts`], so a payload
/// that does not encode a forest is rejected as a deserialization error.
#[cfg(feature = "serde")]
#[cfg_attr(feature = "docsrs", doc(cfg(feature = "serde")))]
impl<'de> serde::Deserialize<'de> for FlatForest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        /// Wire form, before structure checks.
        #[derive(serde::Deserialize)]
        struct Raw {
            /// Node IDs in depth-first pre-order.
            ids: Vec<NodeId>,
            /// Node depths, parallel to `ids`.
            depths: Vec<usize>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_parts(raw.ids, raw.depths).map_err(serde::de::Error::custom)
    }
}
