//! Property tests for the cluster queries.
//!
//! Random weight-ordered edge lists are checked against a breadth-first
//! connectivity oracle that knows nothing about union-find.

use std::collections::VecDeque;

use proptest::prelude::*;

use crate::test_utils::suite_proptest_config;
use crate::{ClusterError, EdgeSequence, WeightedEdge, bottleneck_edge, component_product};

use super::QuerySession;

/// Generates `(element_count, edges)` with weights already in ascending
/// order. Pairs may repeat and may be self-loops.
fn ordered_edges(max_elements: usize) -> impl Strategy<Value = (usize, Vec<WeightedEdge<u32>>)> {
    (1..=max_elements).prop_flat_map(|count| {
        let pair = (0..count, 0..count, 0_u32..8);
        (
            Just(count),
            prop::collection::vec(pair, 0..(count * 4)).prop_map(|raw| {
                let mut weight = 0_u32;
                raw.into_iter()
                    .map(|(source, target, step)| {
                        weight = weight.saturating_add(step);
                        WeightedEdge::new(source, target, weight)
                    })
                    .collect()
            }),
        )
    })
}

/// Sizes of the connected components induced by `edges`, via BFS.
fn oracle_component_sizes(count: usize, edges: &[WeightedEdge<u32>]) -> Vec<usize> {
    let mut adjacency = vec![Vec::new(); count];
    for edge in edges {
        adjacency[edge.source()].push(edge.target());
        adjacency[edge.target()].push(edge.source());
    }

    let mut visited = vec![false; count];
    let mut sizes = Vec::new();
    for start in 0..count {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut queue = VecDeque::from([start]);
        let mut size = 0;
        while let Some(node) = queue.pop_front() {
            size += 1;
            for &next in &adjacency[node] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        sizes.push(size);
    }
    sizes
}

fn oracle_product(count: usize, edges: &[WeightedEdge<u32>], limit: usize) -> u64 {
    let prefix = &edges[..limit.min(edges.len())];
    let mut sizes = oracle_component_sizes(count, prefix);
    sizes.sort_unstable_by(|left, right| right.cmp(left));
    sizes.iter().take(3).map(|&size| size as u64).product()
}

/// Shortest prefix length that connects every element, if any.
fn oracle_connecting_prefix(count: usize, edges: &[WeightedEdge<u32>]) -> Option<usize> {
    (1..=edges.len()).find(|&len| oracle_component_sizes(count, &edges[..len]).len() == 1)
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn component_product_matches_oracle(
        (count, edges) in ordered_edges(24),
        limit in 1_usize..120,
    ) {
        let outcome = component_product(count, &edges, limit)
            .map_err(|err| TestCaseError::fail(format!("query failed: {err}")))?;
        prop_assert_eq!(outcome.product(), oracle_product(count, &edges, limit));
        prop_assert_eq!(outcome.attempts(), limit.min(edges.len()));
    }

    #[test]
    fn component_product_is_deterministic(
        (count, edges) in ordered_edges(24),
        limit in 1_usize..120,
    ) {
        let first = component_product(count, &edges, limit);
        let second = component_product(count, &edges, limit);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn largest_component_never_shrinks((count, edges) in ordered_edges(24)) {
        let sequence = EdgeSequence::new(count, &edges).expect("generated edges are valid");
        let mut session = QuerySession::new(sequence).expect("count is positive");
        let mut largest = session.store().largest_component();
        let mut components = session.store().component_count();
        while session.attempt_up_to(1).expect("edges are in range") == 1 {
            let now = session.store().largest_component();
            prop_assert!(now >= largest);
            prop_assert!(session.store().component_count() <= components);
            largest = now;
            components = session.store().component_count();
        }
        prop_assert_eq!(components, count - session.merges());
    }

    #[test]
    fn bottleneck_matches_connecting_prefix((count, edges) in ordered_edges(16)) {
        let result = bottleneck_edge(count, &edges);
        match (count, oracle_connecting_prefix(count, &edges)) {
            (1, _) => prop_assert_eq!(result, Err(ClusterError::SingleElement)),
            (_, Some(len)) => {
                let bottleneck = result
                    .map_err(|err| TestCaseError::fail(format!("query failed: {err}")))?;
                prop_assert_eq!(bottleneck.edges_consumed(), len);
                prop_assert_eq!(bottleneck.edge(), edges[len - 1]);
            }
            (_, None) => {
                let is_disconnected = matches!(
                    result,
                    Err(ClusterError::Disconnected { edges_consumed, .. })
                        if edges_consumed == edges.len()
                );
                prop_assert!(is_disconnected);
            }
        }
    }
}
