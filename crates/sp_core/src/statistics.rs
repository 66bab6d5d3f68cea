use std::{
    fmt::{Debug, Display},
    time::{Duration, Instant},
};

use histogram::Histogram;

use crate::graph::Graph;

#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub edges_relaxed: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.edges_relaxed = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} edges relaxed in {:?}",
            self.nodes_settled, self.edges_relaxed, self.duration
        )
    }
}

/// Histogram over the number of neighbors per node.
pub fn degree_hist(g: &Graph) -> Histogram {
    let hist = Histogram::new(0, 10, 30).unwrap();
    for node in g.nodes() {
        hist.increment(g.degree(node.id) as u64, 1).unwrap();
    }
    hist
}

pub fn average_degree(g: &Graph) -> f64 {
    if g.num_nodes() == 0 {
        return 0.0;
    }
    let sum: usize = g.nodes().map(|node| g.degree(node.id)).sum();
    sum as f64 / g.num_nodes() as f64
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::node_index,
        search::dijkstra::Dijkstra,
        statistics::{average_degree, degree_hist},
        util::test_graphs::{reference_graph, single_node_graph},
    };

    #[test]
    fn stats_work() {
        let g = reference_graph();

        let mut d = Dijkstra::new(&g);
        d.search(node_index(0), node_index(5));

        assert!(d.stats.duration.is_some());
        assert_eq!(d.stats.nodes_settled, 6);
        // Each connection is looked at once, from the endpoint settled first
        assert_eq!(d.stats.edges_relaxed, 8);
    }

    #[test]
    fn degree_hist_works() {
        let g = reference_graph();

        let hist = degree_hist(&g);
        let total: u64 = hist.into_iter().map(|bucket| bucket.count() as u64).sum();
        assert_eq!(total, 6);

        assert_eq!(average_degree(&g), 16.0 / 6.0);
        assert_eq!(average_degree(&single_node_graph()), 0.0);
    }
}
