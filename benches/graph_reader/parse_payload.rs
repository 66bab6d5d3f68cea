use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_reader::parse_graph_payload;

criterion_group!(benches, parse_payload);
criterion_main!(benches);

fn generate_payload(num_nodes: usize) -> String {
    let nodes: Vec<String> = (0..num_nodes)
        .map(|i| format!("{{\"label\":\"node_{}\"}}", i))
        .collect();
    let edges: Vec<String> = (0..num_nodes)
        .map(|i| {
            format!(
                "{{\"source\":{},\"target\":{},\"cost\":{}.5}}",
                i,
                (i * 7 + 3) % num_nodes,
                i % 20
            )
        })
        .collect();
    format!(
        "{{\"nodes\":[{}],\"edges\":[{}]}}",
        nodes.join(","),
        edges.join(",")
    )
}

pub fn parse_payload(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_payload");
    for size in [1_000, 10_000, 100_000].iter() {
        let text = generate_payload(*size);
        group.throughput(criterion::Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse_graph_payload(black_box(text)).unwrap());
        });
    }
    group.finish();
}
