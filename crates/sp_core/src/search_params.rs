//! Parameters for the shortest path search

/// How the set of discovered but not yet settled nodes is organised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierStrategy {
    /// Unordered set scanned for its minimum on every step. O(V²), ties go to
    /// the node that entered the frontier first.
    #[default]
    Linear,
    /// Binary heap with lazy deletion. O((V + E) log V), ties go to the entry
    /// pushed first.
    Heap,
}

impl std::str::FromStr for FrontierStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(FrontierStrategy::Linear),
            "heap" => Ok(FrontierStrategy::Heap),
            other => Err(format!("unknown frontier strategy `{}`", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchParams {
    pub(crate) strategy: FrontierStrategy,
}

impl SearchParams {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn strategy(mut self, strategy: FrontierStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
