//! Edge fixtures shared by the integration tests.

use junction_core::WeightedEdge;

/// Assigns weights `1, 2, 3, ...` to `pairs` in the order given.
pub fn ranked(pairs: &[(usize, usize)]) -> Vec<WeightedEdge<u64>> {
    pairs
        .iter()
        .zip(1_u64..)
        .map(|(&(source, target), weight)| WeightedEdge::new(source, target, weight))
        .collect()
}

/// Every unordered pair over `count` elements, weighted by `|i - j|` and
/// sorted by weight then by endpoints.
pub fn line_graph(count: usize) -> Vec<WeightedEdge<usize>> {
    let mut edges = Vec::new();
    for source in 0..count {
        for target in (source + 1)..count {
            edges.push(WeightedEdge::new(source, target, target - source));
        }
    }
    edges.sort_by_key(|edge| (edge.weight(), edge.source(), edge.target()));
    edges
}
