//! Per-query state: one disjoint set plus a cursor over the edge sequence.

use crate::{DisjointSet, EdgeSequence, Result, WeightedEdge};

/// State owned by a single query.
///
/// A session walks its edges exactly once and never rolls a union back, so
/// it is consumed by the query that created it.
#[derive(Debug)]
pub struct QuerySession<'a, W> {
    edges: EdgeSequence<'a, W>,
    store: DisjointSet,
    cursor: usize,
    attempts: usize,
    merges: usize,
}

impl<'a, W: Copy + PartialOrd> QuerySession<'a, W> {
    /// Starts a session with every element in its own component.
    ///
    /// # Errors
    /// Returns [`crate::ClusterError::EmptyElementSet`] when the sequence
    /// ranges over no elements.
    pub fn new(edges: EdgeSequence<'a, W>) -> Result<Self> {
        Ok(Self {
            store: DisjointSet::new(edges.element_count())?,
            edges,
            cursor: 0,
            attempts: 0,
            merges: 0,
        })
    }

    /// Returns the next unread edge and advances the cursor.
    pub fn next_edge(&mut self) -> Option<WeightedEdge<W>> {
        let edge = *self.edges.get(self.cursor)?;
        self.cursor = self.cursor.saturating_add(1);
        Some(edge)
    }

    /// Unions the endpoints of `edge`, counting the attempt whether or not
    /// the endpoints were already connected.
    ///
    /// # Errors
    /// Propagates [`crate::ClusterError::ElementOutOfRange`] from the store.
    pub fn attempt(&mut self, edge: WeightedEdge<W>) -> Result<bool> {
        let merged = self.store.union(edge.source(), edge.target())?;
        self.attempts = self.attempts.saturating_add(1);
        if merged {
            self.merges = self.merges.saturating_add(1);
        }
        Ok(merged)
    }

    /// Attempts edges in order until `limit` attempts were made or the
    /// sequence runs out. Returns the number of attempts made by this call.
    ///
    /// # Errors
    /// Propagates [`crate::ClusterError::ElementOutOfRange`] from the store.
    pub fn attempt_up_to(&mut self, limit: usize) -> Result<usize> {
        let start = self.attempts;
        while self.attempts.saturating_sub(start) < limit {
            let Some(edge) = self.next_edge() else {
                break;
            };
            self.attempt(edge)?;
        }
        Ok(self.attempts.saturating_sub(start))
    }

    /// Returns how many edges have been read.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges_consumed(&self) -> usize { self.cursor }

    /// Returns how many unions were attempted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn attempts(&self) -> usize { self.attempts }

    /// Returns how many attempts merged two components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn merges(&self) -> usize { self.merges }

    /// Returns the number of elements in the session.
    #[must_use]
    pub const fn element_count(&self) -> usize {
        self.edges.element_count()
    }

    /// Returns the disjoint set for read-only inspection.
    #[must_use]
    #[rustfmt::skip]
    pub const fn store(&self) -> &DisjointSet { &self.store }

    /// Returns the size of every current component, one entry per root.
    #[must_use]
    pub fn component_sizes(&self) -> Vec<usize> {
        self.store.component_sizes()
    }

    /// Returns the size of the component containing `element`.
    ///
    /// # Errors
    /// Propagates [`crate::ClusterError::ElementOutOfRange`] from the store.
    pub fn component_size(&mut self, element: usize) -> Result<usize> {
        self.store.size(element)
    }
}
