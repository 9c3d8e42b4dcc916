use asymptote::{is_connected, is_connected_with, AdjacencyGraph, AdjacencyMatrix, PushPolicy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn chain(size: usize) -> AdjacencyGraph<usize> {
    let mut g = AdjacencyGraph::with_capacity(size);
    g.add_nodes_from(0..size);
    g.add_edges_from((1..size).map(|i| (i - 1, i)));
    g
}

fn bench_sparse(c: &mut Criterion) {
    // m = n - 1, so the traversal is linear in n.
    let mut group = c.benchmark_group("linear-dfs_chain");
    for size in [1_000usize, 10_000, 100_000] {
        let g = chain(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| black_box(is_connected(g, black_box(&0))));
        });
    }
    group.finish();
}

fn bench_complete(c: &mut Criterion) {
    // m = n(n-1)/2, so the traversal is quadratic in n.
    let mut group = c.benchmark_group("quadratic-dfs_complete");
    for size in [100usize, 200, 400] {
        let g = AdjacencyGraph::complete(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| black_box(is_connected(g, black_box(&0))));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("quadratic-dfs_complete_seen_or_queued");
    for size in [100usize, 200, 400] {
        let g = AdjacencyGraph::complete(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| black_box(is_connected_with(g, black_box(&0), PushPolicy::SeenOrQueued)));
        });
    }
    group.finish();
}

fn bench_matrix(c: &mut Criterion) {
    // Each neighbor scan reads a full row: quadratic even for a chain.
    let mut group = c.benchmark_group("quadratic-dfs_matrix_chain");
    for size in [250usize, 500, 1_000] {
        let mut m = AdjacencyMatrix::new(size);
        for i in 1..size {
            m.add_edge(i - 1, i);
        }
        group.bench_with_input(BenchmarkId::from_parameter(size), &m, |b, m| {
            b.iter(|| black_box(is_connected(m, black_box(&0))));
        });
    }
    group.finish();
}

fn bench_petgraph(c: &mut Criterion) {
    use petgraph::graph::{NodeIndex, UnGraph};

    let mut group = c.benchmark_group("linear-petgraph_dfs_chain");
    for size in [1_000usize, 10_000, 100_000] {
        let mut g = UnGraph::<(), ()>::with_capacity(size, size);
        for _ in 0..size {
            g.add_node(());
        }
        for i in 1..size {
            g.add_edge(NodeIndex::new(i - 1), NodeIndex::new(i), ());
        }
        group.bench_with_input(BenchmarkId::from_parameter(size), &g, |b, g| {
            b.iter(|| {
                let mut dfs = petgraph::visit::Dfs::new(g, NodeIndex::new(0));
                let mut count = 0usize;
                while dfs.next(g).is_some() {
                    count += 1;
                }
                black_box(count == g.node_count())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sparse, bench_complete, bench_matrix, bench_petgraph);
criterion_main!(benches);
