//! Weighted edges and the validated, weight-ordered view the engine consumes.

use std::cmp::Ordering;

use crate::{ClusterError, Result};

/// A single undirected edge between two elements.
///
/// The weight is whatever scalar the caller sorted by (for example a squared
/// distance). The engine only reads it back when reporting a result.
///
/// # Examples
/// ```
/// use junction_core::WeightedEdge;
///
/// let edge = WeightedEdge::new(2, 5, 17_u64);
/// assert_eq!(edge.endpoints(), (2, 5));
/// assert_eq!(edge.weight(), 17);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeightedEdge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W: Copy> WeightedEdge<W> {
    /// Creates an edge between `source` and `target` with the given weight.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }

    /// Returns both endpoints as a `(source, target)` pair.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }
}

impl<W: Copy> From<(usize, usize, W)> for WeightedEdge<W> {
    fn from((source, target, weight): (usize, usize, W)) -> Self {
        Self::new(source, target, weight)
    }
}

/// Borrowed edge list checked against an element count.
///
/// Construction guarantees that every endpoint lies in
/// `[0, element_count)` and that weights never decrease, so the engine can
/// walk the slice by position without re-validating.
///
/// # Examples
/// ```
/// use junction_core::{ClusterError, EdgeSequence, WeightedEdge};
///
/// let edges = [WeightedEdge::new(0, 1, 1_u32), WeightedEdge::new(1, 2, 4)];
/// let sequence = EdgeSequence::new(3, &edges)?;
/// assert_eq!(sequence.len(), 2);
///
/// let unsorted = [WeightedEdge::new(0, 1, 4_u32), WeightedEdge::new(1, 2, 1)];
/// assert_eq!(
///     EdgeSequence::new(3, &unsorted).err(),
///     Some(ClusterError::UnsortedEdges { position: 1 }),
/// );
/// # Ok::<(), ClusterError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EdgeSequence<'a, W> {
    edges: &'a [WeightedEdge<W>],
    element_count: usize,
}

impl<'a, W: Copy + PartialOrd> EdgeSequence<'a, W> {
    /// Validates `edges` against `element_count`.
    ///
    /// # Errors
    /// - [`ClusterError::EmptyElementSet`] when `element_count == 0`.
    /// - [`ClusterError::ElementOutOfRange`] when an endpoint is not below
    ///   `element_count`.
    /// - [`ClusterError::UnsortedEdges`] when a weight is lower than, or not
    ///   comparable with, the weight before it.
    pub fn new(element_count: usize, edges: &'a [WeightedEdge<W>]) -> Result<Self> {
        if element_count == 0 {
            return Err(ClusterError::EmptyElementSet);
        }

        let mut previous: Option<W> = None;
        for (position, edge) in edges.iter().enumerate() {
            for element in [edge.source, edge.target] {
                if element >= element_count {
                    return Err(ClusterError::ElementOutOfRange {
                        element,
                        element_count,
                    });
                }
            }

            if let Some(prior) = previous {
                let ordered = matches!(
                    edge.weight.partial_cmp(&prior),
                    Some(Ordering::Greater | Ordering::Equal)
                );
                if !ordered {
                    return Err(ClusterError::UnsortedEdges { position });
                }
            }
            previous = Some(edge.weight);
        }

        Ok(Self {
            edges,
            element_count,
        })
    }
}

impl<'a, W> EdgeSequence<'a, W> {
    /// Returns the number of elements the edges range over.
    #[must_use]
    #[rustfmt::skip]
    pub const fn element_count(&self) -> usize { self.element_count }

    /// Returns the number of edges.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when there are no edges.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the edge at `position`, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&'a WeightedEdge<W>> {
        self.edges.get(position)
    }

    /// Returns the underlying slice in weight order.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [WeightedEdge<W>] {
        self.edges
    }
}
