//! Tests for ancestor-preserving filtering over fixed forests.

use flatforest::{filter, FlatForest, Forest, NodeId, StructureError};

/// Returns the sample forest.
///
/// Forest to be built:
///
/// ```text
/// 1            6        8
/// +- 2         +- 7     +- 9
/// |  +- 3               +- 10
/// |     +- 4               +- 11
/// +- 5
/// ```
fn sample_forest() -> FlatForest {
    FlatForest::from_parts(
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        vec![0, 1, 2, 3, 1, 0, 1, 0, 1, 1, 2],
    )
    .expect("should never fail: the sample encoding is valid")
}

#[test]
fn keeps_only_nodes_whose_whole_chain_passes() {
    let forest = sample_forest();

    // 3 fails: 4 goes with it. 6 fails: 7 goes with it. 9 fails alone.
    let kept = filter(&forest, |id| id % 3 != 0);

    assert_eq!(kept.ids(), &[1, 2, 5, 8, 10, 11]);
    assert_eq!(kept.depths(), &[0, 1, 1, 0, 1, 2]);
}

#[test]
fn failing_root_drops_its_whole_tree() {
    let forest = FlatForest::from_parts(vec![3, 1, 2], vec![0, 1, 2])
        .expect("should never fail: the encoding is valid");

    let kept = filter(&forest, |id| id % 3 != 0);

    assert!(kept.is_empty());
    assert_eq!(kept.to_string(), "[]");
}

#[test]
fn failing_mid_level_node_drops_its_subtree() {
    // 1
    // +- 3
    // |  +- 4
    // +- 2
    //    +- 5
    let forest = FlatForest::from_parts(vec![1, 3, 4, 2, 5], vec![0, 1, 2, 1, 2])
        .expect("should never fail: the encoding is valid");

    let kept = filter(&forest, |id| id % 3 != 0);

    assert_eq!(kept.ids(), &[1, 2, 5]);
    assert_eq!(kept.depths(), &[0, 1, 2]);
}

#[test]
fn all_passing_chain_is_kept_unchanged() {
    let forest = FlatForest::from_parts(vec![1, 2, 4], vec![0, 1, 2])
        .expect("should never fail: the encoding is valid");

    assert_eq!(filter(&forest, |id| id % 3 != 0), forest);
}

#[test]
fn flat_siblings_filter_independently() {
    // Leaves under one root: removing one sibling does not touch the rest.
    let forest = FlatForest::from_parts(vec![1, 2, 3, 4, 5], vec![0, 1, 1, 1, 1])
        .expect("should never fail: the encoding is valid");

    let kept = filter(&forest, |id| id % 3 != 0);

    assert_eq!(kept.ids(), &[1, 2, 4, 5]);
    assert_eq!(kept.depths(), &[0, 1, 1, 1]);
}

#[test]
fn second_root_tree_dropped_whole() {
    // 1        3
    // +- 2     +- 4
    //          +- 5
    let forest = FlatForest::from_parts(vec![1, 2, 3, 4, 5], vec![0, 1, 0, 1, 1])
        .expect("should never fail: the encoding is valid");

    let kept = filter(&forest, |id| id % 3 != 0);

    assert_eq!(kept.ids(), &[1, 2]);
    assert_eq!(kept.depths(), &[0, 1]);
}

#[test]
fn empty_forest_stays_empty() {
    let forest = FlatForest::new();

    assert!(filter(&forest, |_| true).is_empty());
    assert!(filter(&forest, |_| false).is_empty());
}

#[test]
fn keep_all_copies_and_drop_all_drains() {
    let forest = sample_forest();

    assert_eq!(filter(&forest, |_| true), forest);
    assert!(filter(&forest, |_| false).is_empty());
}

#[test]
fn rejects_mismatched_input_sequences() {
    let result = FlatForest::from_parts(vec![1, 2, 3], vec![0, 1]);

    assert!(matches!(
        result,
        Err(StructureError::LengthMismatch { ids: 3, depths: 2 })
    ));
}

#[test]
fn predicate_runs_in_order_and_skips_rejected_subtrees() {
    let forest = sample_forest();

    let mut seen = Vec::new();
    let kept = filter(&forest, |id| {
        seen.push(id);
        id % 3 != 0
    });

    // 4 and 7 sit under rejected nodes and are never examined.
    assert_eq!(seen, &[1, 2, 3, 5, 6, 8, 9, 10, 11]);
    assert_eq!(kept.ids(), &[1, 2, 5, 8, 10, 11]);
}

#[test]
fn duplicate_ids_are_tested_per_occurrence() {
    // IDs carry no identity for the filter; each position stands alone.
    let forest = FlatForest::from_parts(vec![1, 2, 1, 2], vec![0, 1, 0, 1])
        .expect("should never fail: the encoding is valid");

    let kept = filter(&forest, |id| id != 2);

    assert_eq!(kept.ids(), &[1, 1]);
    assert_eq!(kept.depths(), &[0, 0]);
}

#[test]
#[should_panic = "boom"]
fn predicate_panic_propagates() {
    let forest = sample_forest();

    let _ = filter(&forest, |id| {
        if id == 5 {
            panic!("boom");
        }
        true
    });
}

/// Forest computed on the fly: `width` roots, each with a single child.
///
/// Node at index `2k` is a root with ID `2k`; node at index `2k + 1` is its
/// child.
struct PairedRows {
    /// Number of root/child pairs.
    width: usize,
}

impl Forest for PairedRows {
    fn len(&self) -> usize {
        self.width * 2
    }

    fn node_id(&self, index: usize) -> NodeId {
        assert!(index < self.len(), "index {index} out of range");
        index as NodeId
    }

    fn depth(&self, index: usize) -> usize {
        assert!(index < self.len(), "index {index} out of range");
        index % 2
    }
}

#[test]
fn works_over_any_accessor_implementation() {
    let forest = PairedRows { width: 4 };

    // Roots 0 and 4 fail, taking their children 1 and 5 with them.
    let kept = filter(&forest, |id| id % 4 != 0);

    assert_eq!(kept.ids(), &[2, 3, 6, 7]);
    assert_eq!(kept.depths(), &[0, 1, 0, 1]);
}

#[test]
fn deep_chain_filters_without_recursion() {
    let len = 100_000;
    let ids: Vec<NodeId> = (0..len as NodeId).collect();
    let depths: Vec<usize> = (0..len).collect();
    let forest = FlatForest::from_parts(ids, depths)
        .expect("should never fail: a single chain is a valid encoding");

    assert_eq!(filter(&forest, |_| true), forest);
    // Rejecting the root skips the remaining 99 999 nodes in one jump.
    assert!(filter(&forest, |id| id != 0).is_empty());
    // Rejecting mid-chain keeps exactly the prefix above the cut.
    let kept = filter(&forest, |id| id < 1_000);
    assert_eq!(kept.len(), 1_000);
    assert_eq!(kept.depths().last(), Some(&999));
}
