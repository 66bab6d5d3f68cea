//! Label-setting shortest path search from one source to every node.
//!
//! Starting with the source at cost 0, the search repeatedly settles the
//! frontier node with the smallest cost and relaxes the edges to all of its
//! neighbors that are not settled yet. It stops once the frontier is empty, so
//! every reachable node ends up settled with its final cost.
use log::{debug, info};

use crate::graph::{Graph, NodeIndex};
use crate::search_params::{FrontierStrategy, SearchParams};
use crate::statistics::SearchStats;

use super::frontier::{Frontier, HeapFrontier, LinearFrontier};
use super::shortest_path::{ShortestPathResult, ShortestPathTree};
use super::{Label, NodeState, SearchError};

/// All labels live in the search, never in the graph, so any number of
/// searches may share one [`Graph`].
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    params: SearchParams,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self::with_params(graph, SearchParams::default())
    }

    pub fn with_params(graph: &'a Graph, params: SearchParams) -> Self {
        Dijkstra {
            g: graph,
            params,
            stats: SearchStats::default(),
        }
    }

    /// Shortest paths from `source` to all nodes.
    ///
    /// **Panics** if `source` does not exist
    pub fn search_all(&mut self, source: NodeIndex) -> ShortestPathTree {
        assert!(
            source.index() < self.g.num_nodes(),
            "Source node index ({}) does not exist",
            source.index()
        );

        self.stats.init();

        let tree = match self.params.strategy {
            FrontierStrategy::Linear => self.settle_all(source, LinearFrontier::new()),
            FrontierStrategy::Heap => self.settle_all(source, HeapFrontier::new()),
        };

        self.stats.finish();
        info!("{}", self.stats);
        tree
    }

    fn settle_all<F: Frontier>(&mut self, source: NodeIndex, mut frontier: F) -> ShortestPathTree {
        let mut labels = vec![Label::default(); self.g.num_nodes()];
        let mut settled = Vec::new();

        labels[source.index()] = Label {
            cost: 0.0,
            predecessor: None,
            state: NodeState::Unvisited,
        };
        frontier.insert(source, 0.0);

        while let Some(node_idx) = frontier.pop_min(&labels) {
            labels[node_idx.index()].state = NodeState::Visited;
            settled.push(node_idx);
            self.stats.nodes_settled += 1;

            let weight = labels[node_idx.index()].cost;

            for (neighbor, edge) in self.g.neighbors(node_idx) {
                let label = &mut labels[neighbor.index()];
                if label.state == NodeState::Visited {
                    continue;
                }

                self.stats.edges_relaxed += 1;
                let new_distance = weight + edge.weight;

                // An unseen node has infinite cost, so it always enters the
                // frontier here.
                if new_distance < label.cost {
                    label.cost = new_distance;
                    label.predecessor = Some(node_idx);
                    label.state = NodeState::Unvisited;
                    frontier.insert(neighbor, new_distance);
                }
            }
        }

        ShortestPathTree::new(source, labels, settled)
    }

    /// Shortest path between two nodes given by index.
    ///
    /// Returns `None` if one of the nodes does not exist.
    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Option<ShortestPathResult> {
        if source.index() >= self.g.num_nodes() || target.index() >= self.g.num_nodes() {
            return None;
        }

        let result = self.search_all(source).result(self.g, target);

        if result.is_reachable() {
            debug!("Path found: {}", result);
            info!(
                "Path found: {:?}/{} nodes settled",
                self.stats.duration, self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.duration, self.stats.nodes_settled
            );
        }

        Some(result)
    }

    /// Shortest path between the nodes named `source` and `target`.
    ///
    /// Both names are resolved before the search starts.
    pub fn search_by_name(
        &mut self,
        source: &str,
        target: &str,
    ) -> Result<ShortestPathResult, SearchError> {
        let (s, t) = self.resolve_names(source, target)?;

        self.search(s, t)
            .ok_or_else(|| SearchError::TargetNotFound(target.to_string()))
    }

    /// Looks up the nodes named `source` and `target`.
    pub fn resolve_names(
        &self,
        source: &str,
        target: &str,
    ) -> Result<(NodeIndex, NodeIndex), SearchError> {
        let s = self
            .g
            .node_by_name(source)
            .ok_or_else(|| SearchError::SourceNotFound(source.to_string()))?;
        let t = self
            .g
            .node_by_name(target)
            .ok_or_else(|| SearchError::TargetNotFound(target.to_string()))?;
        Ok((s, t))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{
        constants::{INFINITY, MAX_WEIGHT},
        edge,
        graph::node_index,
        search::{assert_no_path, assert_path},
        util::test_graphs::{
            disconnected_graph, generate_complex_graph, random_graph, reference_graph,
        },
    };

    use super::*;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const STRATEGIES: [FrontierStrategy; 2] = [FrontierStrategy::Linear, FrontierStrategy::Heap];

    #[test]
    fn reference_scenario() {
        init_log();
        let g = reference_graph();

        for strategy in STRATEGIES {
            let mut d = Dijkstra::with_params(&g, SearchParams::new().strategy(strategy));
            let result = d.search_by_name("node_0", "node_5").unwrap();

            assert_eq!(result.source_node_name(), "node_0");
            assert_eq!(result.target_node_name(), "node_5");
            assert_eq!(result.total_cost(), 23.0);
            assert_eq!(
                result.rendered_path(),
                "node_0 -> node_1 -> node_3 -> node_5"
            );
            assert_eq!(d.stats.nodes_settled, 6);
        }
    }

    #[test]
    fn simple_path() {
        //      7 -- 8 -- 9
        //      |         |
        // 0 -- 5 -- 6 -  |
        // |         |  \ |
        // 1 -- 2 -- 3 -- 4
        let mut g = Graph::new();

        for i in 0..10 {
            g.add_node(i.to_string());
        }

        g.add_edge(edge!(0u32, 1u32, 1.0));
        g.add_edge(edge!(1u32, 2u32, 1.0));
        g.add_edge(edge!(2u32, 3u32, 1.0));
        g.add_edge(edge!(3u32, 4u32, 20.0));
        g.add_edge(edge!(0u32, 5u32, 5.0));
        g.add_edge(edge!(5u32, 6u32, 1.0));
        g.add_edge(edge!(6u32, 4u32, 20.0));
        g.add_edge(edge!(6u32, 3u32, 20.0));
        g.add_edge(edge!(5u32, 7u32, 5.0));
        g.add_edge(edge!(7u32, 8u32, 1.0));
        g.add_edge(edge!(8u32, 9u32, 1.0));
        g.add_edge(edge!(9u32, 4u32, 1.0));

        let mut d = Dijkstra::new(&g);

        assert_path("0 -> 5 -> 7 -> 8 -> 9 -> 4", 13.0, d.search(0.into(), 4.into()));
        assert_path("4 -> 9 -> 8 -> 7 -> 5 -> 0", 13.0, d.search(4.into(), 0.into()));
        assert_path("6 -> 5 -> 0 -> 1 -> 2 -> 3", 9.0, d.search(6.into(), 3.into()));
        assert_path("4", 0.0, d.search(4.into(), 4.into()));
        assert_path(
            "1 -> 0 -> 5 -> 7 -> 8 -> 9 -> 4",
            14.0,
            d.search(1.into(), 4.into()),
        );
    }

    #[test]
    fn go_around() {
        // 0 -- 1
        // |    |
        // 2 -- 3
        let mut g = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        let d = g.add_node("d");

        g.add_edge(edge!(a, b, 10.0));
        g.add_edge(edge!(a, c, 1.0));
        g.add_edge(edge!(c, d, 1.0));
        g.add_edge(edge!(d, b, 1.0));

        let mut dijkstra = Dijkstra::new(&g);

        assert_path("a -> c -> d -> b", 3.0, dijkstra.search(a, b));
    }

    #[test]
    fn unreachable_target_keeps_infinite_cost() {
        let mut g = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.add_edge(edge!(a, b, 1.0));

        for strategy in STRATEGIES {
            let mut d = Dijkstra::with_params(&g, SearchParams::new().strategy(strategy));
            assert_no_path(d.search(a, c));

            let tree = d.search_all(a);
            assert!(tree.is_reachable(b));
            assert!(!tree.is_reachable(c));
            assert_eq!(tree.labels()[c.index()].state, NodeState::Unseen);
            assert!(tree.path(c).is_empty());
        }
    }

    #[test]
    fn strategies_agree_on_unreachable_nodes() {
        let g = disconnected_graph();
        let source = g.node_by_name("a0").unwrap();

        let linear = Dijkstra::new(&g).search_all(source);
        let heap = Dijkstra::with_params(&g, SearchParams::new().strategy(FrontierStrategy::Heap))
            .search_all(source);

        for node in g.nodes() {
            assert_eq!(linear.is_reachable(node.id), heap.is_reachable(node.id));
            assert_eq!(linear.cost(node.id), heap.cost(node.id));
        }
        assert_eq!(linear.cost(g.node_by_name("b1").unwrap()), INFINITY);
    }

    #[test]
    fn largest_weights_keep_paths_finite() {
        let mut g = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.add_edge(edge!(a, b, MAX_WEIGHT));
        g.add_edge(edge!(b, c, MAX_WEIGHT));

        for strategy in STRATEGIES {
            let mut d = Dijkstra::with_params(&g, SearchParams::new().strategy(strategy));
            let result = d.search(a, c).unwrap();
            assert!(result.is_reachable());
            assert_eq!(result.total_cost(), 2.0 * MAX_WEIGHT);
        }
    }

    #[test]
    fn one_tree_answers_the_query() {
        let g = reference_graph();
        let mut d = Dijkstra::new(&g);

        let (source, target) = d.resolve_names("node_0", "node_5").unwrap();
        let tree = d.search_all(source);
        let from_tree = tree.result(&g, target);

        assert_eq!(Some(from_tree), Dijkstra::new(&g).search(source, target));
        assert_eq!(tree.settle_order().len(), g.num_nodes());
        assert_eq!(
            d.resolve_names("node_0", "node_9"),
            Err(SearchError::TargetNotFound("node_9".to_string()))
        );
    }

    #[test]
    fn unknown_names() {
        let g = reference_graph();
        let mut d = Dijkstra::new(&g);

        assert_eq!(
            d.search_by_name("nope", "node_5"),
            Err(SearchError::SourceNotFound("nope".to_string()))
        );
        assert_eq!(
            d.search_by_name("node_0", "nope"),
            Err(SearchError::TargetNotFound("nope".to_string()))
        );
        // Nothing was searched
        assert_eq!(d.stats.nodes_settled, 0);
        assert!(d.search(node_index(0), node_index(42)).is_none());
    }

    #[test]
    fn equal_cost_ties_follow_frontier_order() {
        // Two paths of cost 2 from s to t; the neighbor inserted first wins.
        let mut g = Graph::new();
        let s = g.add_node("s");
        let x = g.add_node("x");
        let y = g.add_node("y");
        let t = g.add_node("t");
        g.add_edge(edge!(s, x, 1.0));
        g.add_edge(edge!(s, y, 1.0));
        g.add_edge(edge!(x, t, 1.0));
        g.add_edge(edge!(y, t, 1.0));

        for strategy in STRATEGIES {
            let mut d = Dijkstra::with_params(&g, SearchParams::new().strategy(strategy));
            assert_path("s -> x -> t", 2.0, d.search(s, t));
        }
    }

    #[test]
    fn zero_cost_edges() {
        let mut g = Graph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.add_edge(edge!(a, b, 0.0));
        g.add_edge(edge!(b, c, 0.0));
        g.add_edge(edge!(a, c, 1.0));

        assert_path("a -> b -> c", 0.0, Dijkstra::new(&g).search(a, c));
    }

    #[test]
    fn settled_nodes_are_final() {
        let g = generate_complex_graph();

        for strategy in STRATEGIES {
            let mut d = Dijkstra::with_params(&g, SearchParams::new().strategy(strategy));
            let tree = d.search_all(node_index(0));

            // Every node is settled exactly once and in non-decreasing cost order
            assert_eq!(tree.settle_order().len(), g.num_nodes());
            for pair in tree.settle_order().windows(2) {
                assert!(tree.cost(pair[0]) <= tree.cost(pair[1]));
            }

            // The predecessor of each node was settled before it
            for (pos, node) in tree.settle_order().iter().enumerate() {
                if let Some(pred) = tree.labels()[node.index()].predecessor {
                    let pred_pos = tree
                        .settle_order()
                        .iter()
                        .position(|n| *n == pred)
                        .unwrap();
                    assert!(pred_pos < pos);
                    assert_abs_diff_eq!(
                        tree.cost(*node),
                        tree.cost(pred) + g.edge_weight(pred, *node).unwrap()
                    );
                }
            }
        }
    }

    #[test]
    fn searches_share_a_graph() {
        let g = reference_graph();
        let mut first = Dijkstra::new(&g);
        let mut second = Dijkstra::with_params(&g, SearchParams::new().strategy(FrontierStrategy::Heap));

        let a = first.search_by_name("node_0", "node_5").unwrap();
        let b = second.search_by_name("node_5", "node_0").unwrap();
        let c = first.search_by_name("node_0", "node_5").unwrap();

        assert_eq!(a, c);
        assert_eq!(b.total_cost(), 23.0);
        assert_eq!(b.rendered_path(), "node_5 -> node_3 -> node_1 -> node_0");
    }

    #[test]
    fn heap_and_linear_agree_on_random_graphs() {
        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&(random_graph(12, 30), 0..12usize), |(g, source)| {
                let source = node_index(source);
                let linear = Dijkstra::new(&g).search_all(source);
                let heap = Dijkstra::with_params(
                    &g,
                    SearchParams::new().strategy(FrontierStrategy::Heap),
                )
                .search_all(source);

                for node in g.nodes() {
                    assert_eq!(linear.is_reachable(node.id), heap.is_reachable(node.id));
                    if linear.is_reachable(node.id) {
                        assert_abs_diff_eq!(linear.cost(node.id), heap.cost(node.id), epsilon = 1e-9);
                    } else {
                        assert_eq!(linear.cost(node.id), INFINITY);
                        assert_eq!(heap.cost(node.id), INFINITY);
                    }
                }
                Ok(())
            })
            .unwrap();
    }
}
