//! Benchmarks for the ancestor-preserving filter pass.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flatforest::{filter, FlatForest, NodeId};

/// Build a single chain: every node one level below its predecessor.
fn build_chain(len: usize) -> FlatForest {
    let ids = (0..len as NodeId).collect();
    let depths = (0..len).collect();
    FlatForest::from_parts(ids, depths).expect("chain encoding is valid")
}

/// Build one root with `len - 1` direct children.
fn build_comb(len: usize) -> FlatForest {
    let ids = (0..len as NodeId).collect();
    let depths = (0..len).map(|index| usize::from(index != 0)).collect();
    FlatForest::from_parts(ids, depths).expect("comb encoding is valid")
}

/// Build a deterministic pseudo-random walk over the allowed depth steps.
fn build_mixed(len: usize) -> FlatForest {
    let ids = (0..len as NodeId).collect();

    let mut state: u32 = 0x2545_f491;
    let mut prev = 0;
    let mut depths = Vec::with_capacity(len);
    for index in 0..len {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;

        let depth = if index == 0 {
            0
        } else {
            state as usize % (prev + 2)
        };
        depths.push(depth);
        prev = depth;
    }

    FlatForest::from_parts(ids, depths).expect("derived walk encoding is valid")
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for len in [1_000, 10_000, 100_000] {
        let mixed = build_mixed(len);
        group.bench_with_input(
            BenchmarkId::new("mixed_keep_all", len),
            &mixed,
            |b, forest| {
                b.iter(|| black_box(filter(black_box(forest), |_| true)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("mixed_every_third", len),
            &mixed,
            |b, forest| {
                b.iter(|| black_box(filter(black_box(forest), |id| id % 3 != 0)));
            },
        );

        // Rejecting the node halfway down skips the lower half in one jump.
        let chain = build_chain(len);
        let cut = (len / 2) as NodeId;
        group.bench_with_input(
            BenchmarkId::new("chain_cut_half", len),
            &chain,
            |b, forest| {
                b.iter(|| black_box(filter(black_box(forest), |id| id < cut)));
            },
        );

        // Widest shape: no subtrees to skip, every node examined.
        let comb = build_comb(len);
        group.bench_with_input(
            BenchmarkId::new("comb_every_third", len),
            &comb,
            |b, forest| {
                b.iter(|| black_box(filter(black_box(forest), |id| id % 3 != 0)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
