use graph_reader::{EdgeRecord, GraphPayload, NodeRecord};

use crate::{edge, graph::Graph, graph_builder::GraphBuilder};

/// Payload of the six node graph used throughout the tests.
///
/// ```text
///   node_0 --10-- node_1 --12-- node_3
///     |             |          /  |
///     15            15        1   2
///     |             |        /    |
///     |           node_5 --5-- node_4
///     |                           |
///   node_2 ----------10-----------+
/// ```
pub fn reference_payload() -> GraphPayload {
    let nodes = (0..6)
        .map(|i| NodeRecord {
            label: format!("node_{}", i),
        })
        .collect();

    let edges = vec![
        EdgeRecord::new(0, 1, 10.0),
        EdgeRecord::new(0, 2, 15.0),
        EdgeRecord::new(1, 3, 12.0),
        EdgeRecord::new(1, 5, 15.0),
        EdgeRecord::new(2, 4, 10.0),
        EdgeRecord::new(3, 4, 2.0),
        EdgeRecord::new(3, 5, 1.0),
        EdgeRecord::new(4, 5, 5.0),
    ];

    GraphPayload::new(nodes, edges)
}

pub fn reference_graph() -> Graph {
    GraphBuilder::new()
        .build(&reference_payload())
        .expect("Reference payload is valid")
}

pub fn single_node_graph() -> Graph {
    let mut g = Graph::new();
    g.add_node("only");
    g
}

pub fn disconnected_graph() -> Graph {
    // a0 -- a1 -- a2
    // b0 -- b1 -- b2
    let mut g = Graph::new();
    let a = ["a0", "a1", "a2"].map(|name| g.add_node(name));
    let b = ["b0", "b1", "b2"].map(|name| g.add_node(name));

    g.add_edge(edge!(a[0], a[1], 1.0));
    g.add_edge(edge!(a[1], a[2], 1.0));
    g.add_edge(edge!(b[0], b[1], 3.0));
    g.add_edge(edge!(b[1], b[2], 1.0));

    g
}

pub fn generate_complex_graph() -> Graph {
    let mut graph = Graph::new();

    let a = graph.add_node("A");
    let b = graph.add_node("B");
    let c = graph.add_node("C");
    let d = graph.add_node("D");
    let e = graph.add_node("E");
    let f = graph.add_node("F");
    let g = graph.add_node("G");
    let h = graph.add_node("H");
    let i = graph.add_node("I");
    let j = graph.add_node("J");
    let k = graph.add_node("K");

    graph.add_edge(edge!(a, b, 3.0)); // A <=> B
    graph.add_edge(edge!(a, c, 5.0)); // A <=> C
    graph.add_edge(edge!(a, k, 3.0)); // A <=> K

    graph.add_edge(edge!(b, d, 5.0)); // B <=> D
    graph.add_edge(edge!(b, c, 3.0)); // B <=> C

    graph.add_edge(edge!(c, d, 2.0)); // C <=> D
    graph.add_edge(edge!(c, j, 2.0)); // C <=> J

    graph.add_edge(edge!(d, j, 4.0)); // D <=> J
    graph.add_edge(edge!(d, e, 7.0)); // D <=> E

    graph.add_edge(edge!(e, j, 3.0)); // E <=> J
    graph.add_edge(edge!(e, f, 6.0)); // E <=> F

    graph.add_edge(edge!(f, h, 2.0)); // F <=> H
    graph.add_edge(edge!(f, g, 4.0)); // F <=> G

    graph.add_edge(edge!(g, h, 3.0)); // G <=> H
    graph.add_edge(edge!(g, i, 5.0)); // G <=> I

    graph.add_edge(edge!(h, i, 3.0)); // H <=> I
    graph.add_edge(edge!(h, j, 2.0)); // H <=> J

    graph.add_edge(edge!(i, j, 4.0)); // I <=> J
    graph.add_edge(edge!(i, k, 6.0)); // I <=> K

    graph.add_edge(edge!(j, k, 3.0)); // J <=> K

    graph
}

/// Generates a graph with `num_nodes` nodes named `n0, n1, ...` and up to
/// `max_edges` random connections. Integral weights keep equal-cost paths
/// likely.
pub fn random_graph_from_seed(num_nodes: usize, max_edges: usize, seed: u64) -> Graph {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    let nodes = (0..num_nodes)
        .map(|i| NodeRecord {
            label: format!("n{}", i),
        })
        .collect();

    let num_edges = if num_nodes == 0 { 0 } else { rng.gen_range(0..=max_edges) };
    let edges = (0..num_edges)
        .map(|_| {
            EdgeRecord::new(
                rng.gen_range(0..num_nodes) as i64,
                rng.gen_range(0..num_nodes) as i64,
                rng.gen_range(0..20) as f64,
            )
        })
        .collect();

    GraphBuilder::new()
        .build(&GraphPayload::new(nodes, edges))
        .expect("Generated payload is valid")
}

#[cfg(test)]
pub fn random_graph(
    num_nodes: usize,
    max_edges: usize,
) -> impl proptest::strategy::Strategy<Value = Graph> {
    use proptest::prelude::*;

    proptest::collection::vec((0..num_nodes, 0..num_nodes, 0u32..20), 0..=max_edges).prop_map(
        move |edges| {
            let mut g = Graph::with_capacity(num_nodes, edges.len() * 2);
            for i in 0..num_nodes {
                g.add_node(format!("n{}", i));
            }
            for (source, target, weight) in edges {
                g.add_edge(edge!(source as u32, target as u32, weight as f64));
            }
            g
        },
    )
}
