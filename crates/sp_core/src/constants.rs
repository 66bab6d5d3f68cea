/// Edge weight type
pub type Weight = f64;
/// Cost of a node no path is known to
pub const INFINITY: Weight = Weight::INFINITY;
/// Largest edge weight accepted by the graph builder. A path over `u32::MAX`
/// such edges still has a finite cost.
pub const MAX_WEIGHT: Weight = 1e290;
