use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sp_core::{
    graph::{node_index, Graph, NodeIndex},
    search::dijkstra::Dijkstra,
    search_params::{FrontierStrategy, SearchParams},
    util::test_graphs::random_graph_from_seed,
};

criterion_group!(benches, frontier_strategies, full_tree);
criterion_main!(benches);

fn random_queries(g: &Graph, n: usize) -> Vec<(NodeIndex, NodeIndex)> {
    let mut rng = StdRng::seed_from_u64(187);
    (0..n)
        .map(|_| {
            (
                node_index(rng.gen_range(0..g.num_nodes())),
                node_index(rng.gen_range(0..g.num_nodes())),
            )
        })
        .collect()
}

pub fn frontier_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_strategies");
    for size in [100, 500, 1_000, 2_000].iter() {
        let g = random_graph_from_seed(*size, size * 3, 42);
        let queries = random_queries(&g, 10);

        for strategy in [FrontierStrategy::Linear, FrontierStrategy::Heap] {
            let params = SearchParams::new().strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), size),
                &queries,
                |b, queries| {
                    b.iter(|| {
                        for (src, dst) in queries {
                            let mut dijkstra = Dijkstra::with_params(&g, params);
                            black_box(dijkstra.search(*src, *dst));
                        }
                    })
                },
            );
        }
    }
    group.finish();
}

pub fn full_tree(c: &mut Criterion) {
    let g = random_graph_from_seed(5_000, 15_000, 7);

    c.bench_with_input(
        BenchmarkId::new("full_tree", "heap"),
        &g,
        |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::with_params(
                    g,
                    SearchParams::new().strategy(FrontierStrategy::Heap),
                );
                black_box(dijkstra.search_all(node_index(0)));
            })
        },
    );
}
