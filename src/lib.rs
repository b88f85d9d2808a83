//! Ordered forest stored as a flat depth-annotated sequence, with
//! ancestor-preserving filtering.
//!
//! # Forest model
//!
//! A forest is a sequence of `(id, depth)` pairs listed in depth-first
//! pre-order. The node at depth `d` is a child of the nearest preceding node
//! at depth `d - 1`; nodes at depth 0 are tree roots. There are no parent
//! pointers and no per-node allocation; structure is recovered from the
//! depth sequence alone (see the [`traverse`] module).
//!
//! ```text
//! ids:    [1, 2, 3, 4, 5, 6]       1           5
//! depths: [0, 1, 2, 1, 0, 1]       +- 2        +- 6
//!                                  |  +- 3
//!                                  +- 4
//! ```
//!
//! A depth sequence is a valid encoding when the first node (if any) has
//! depth 0 and every node is at most one level deeper than its predecessor.
//! [`FlatForest::from_parts`] enforces these rules; [`ForestBuilder`]
//! produces sequences that satisfy them by construction.
//!
//! The accessor side is the [`Forest`] trait; everything else ([`filter()`],
//! [`display()`], the traversal helpers) is a free function over any
//! implementation of it.
//!
//! # Examples
//!
//! ```
//! use flatforest::{filter, ForestBuilder};
//!
//! let mut builder = ForestBuilder::new();
//! builder
//!     .root(1)
//!     .child(2)
//!     .child(3)
//!     .parent()
//!     .sibling(4)
//!     .root(5)
//!     .child(6);
//!
//! // 1            5
//! // +- 2         +- 6
//! // |  +- 3
//! // +- 4
//! let forest = builder.finish();
//! assert_eq!(forest.to_string(), "[1:0, 2:1, 3:2, 4:1, 5:0, 6:1]");
//!
//! // Dropping 2 drops its descendant 3 with it, unexamined.
//! let kept = filter(&forest, |id| id != 2);
//! assert_eq!(kept.to_string(), "[1:0, 4:1, 5:0, 6:1]");
//! ```
//!
//! # Features
//!
//! * `serde`: `Serialize` and `Deserialize` for [`FlatForest`].
//!   Deserialization validates the structure rules, so a malformed payload
//!   is rejected instead of producing a broken forest.
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod builder;
mod display;
mod error;
mod filter;
mod flat;
mod forest;
pub mod traverse;

pub use self::builder::ForestBuilder;
pub use self::display::{display, outline, ForestDisplay, Outline};
pub use self::error::{AccessError, StructureError};
pub use self::filter::filter;
pub use self::flat::FlatForest;
pub use self::forest::{Forest, NodeId};
