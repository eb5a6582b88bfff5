//! Kruskal-style cluster queries over a weight-ordered edge sequence.
//!
//! Both queries share one [`QuerySession`] discipline: edges are read in the
//! order supplied and each one is offered to the disjoint set exactly once.
//! They differ in what counts as progress and when to stop:
//!
//! - [`ClusterEngine::component_product`] spends a fixed attempt budget,
//!   counting redundant edges too, then multiplies the largest component
//!   sizes.
//! - [`ClusterEngine::bottleneck_edge`] only looks at edges that merged two
//!   components and stops at the first one that spans every element.

mod session;

use std::num::NonZeroUsize;

use tracing::{Span, debug, field, instrument};

use crate::{
    BottleneckEdge, ClusterEngineBuilder, ClusterError, ComponentProduct, EdgeSequence, Result,
    WeightedEdge,
};

pub use self::session::QuerySession;

/// Runs cluster queries with a validated configuration.
///
/// Construct instances through [`ClusterEngineBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterEngine {
    attempt_limit: NonZeroUsize,
    top_components: NonZeroUsize,
}

impl ClusterEngine {
    pub(crate) const fn new(attempt_limit: NonZeroUsize, top_components: NonZeroUsize) -> Self {
        Self {
            attempt_limit,
            top_components,
        }
    }

    /// Returns the attempt budget for component product queries.
    #[must_use]
    #[rustfmt::skip]
    pub const fn attempt_limit(&self) -> NonZeroUsize { self.attempt_limit }

    /// Returns how many of the largest components are multiplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn top_components(&self) -> NonZeroUsize { self.top_components }

    /// Attempts up to [`Self::attempt_limit`] edges, then multiplies the
    /// sizes of the [`Self::top_components`] largest components.
    ///
    /// Every edge read consumes one attempt, including edges whose endpoints
    /// are already connected. Reading stops early when the edges run out.
    /// Absent components (fewer components than requested) contribute a
    /// factor of one.
    ///
    /// # Errors
    /// Returns [`ClusterError::ProductOverflow`] when the product does not
    /// fit in a `u64`.
    ///
    /// # Examples
    /// ```
    /// use junction_core::{ClusterEngineBuilder, EdgeSequence, WeightedEdge};
    ///
    /// let edges: Vec<_> = [(0, 1), (2, 3), (4, 5), (0, 2), (1, 4)]
    ///     .into_iter()
    ///     .zip(1_u64..)
    ///     .map(|((a, b), w)| WeightedEdge::new(a, b, w))
    ///     .collect();
    /// let engine = ClusterEngineBuilder::new().with_attempt_limit(3).build()?;
    /// let outcome = engine.component_product(EdgeSequence::new(6, &edges)?)?;
    /// assert_eq!(outcome.product(), 8);
    /// # Ok::<(), junction_core::ClusterError>(())
    /// ```
    #[instrument(
        name = "engine.component_product",
        level = "debug",
        err,
        skip(self, edges),
        fields(
            element_count = edges.element_count(),
            edge_count = edges.len(),
            attempt_limit = self.attempt_limit.get(),
            merges = field::Empty,
        ),
    )]
    pub fn component_product<W: Copy + PartialOrd>(
        &self,
        edges: EdgeSequence<'_, W>,
    ) -> Result<ComponentProduct> {
        let mut session = QuerySession::new(edges)?;
        let attempts = session.attempt_up_to(self.attempt_limit.get())?;

        let mut sizes = session.component_sizes();
        let component_count = sizes.len();
        sizes.sort_unstable_by(|left, right| right.cmp(left));
        sizes.truncate(self.top_components.get());

        let product = multiply_sizes(&sizes)?;
        Span::current().record("merges", session.merges());
        debug!(attempts, product, component_count, "component product computed");

        Ok(ComponentProduct::new(
            product,
            sizes,
            attempts,
            session.merges(),
            component_count,
        ))
    }

    /// Finds the first edge whose merge joins every element into a single
    /// component.
    ///
    /// Redundant edges are read but never checked; only a successful merge
    /// can complete the spanning structure.
    ///
    /// # Errors
    /// - [`ClusterError::SingleElement`] when the sequence ranges over one
    ///   element, since no edge can ever be the connecting one.
    /// - [`ClusterError::Disconnected`] when the edges run out first.
    ///
    /// # Examples
    /// ```
    /// use junction_core::{ClusterEngineBuilder, ClusterError, EdgeSequence, WeightedEdge};
    ///
    /// let edges = [
    ///     WeightedEdge::new(0, 1, 1_u64),
    ///     WeightedEdge::new(1, 2, 2),
    ///     WeightedEdge::new(0, 2, 3),
    /// ];
    /// let engine = ClusterEngineBuilder::new().build()?;
    /// let err = engine
    ///     .bottleneck_edge(EdgeSequence::new(5, &edges)?)
    ///     .expect_err("elements 3 and 4 are unreachable");
    /// assert!(matches!(err, ClusterError::Disconnected { largest_component: 3, .. }));
    /// # Ok::<(), ClusterError>(())
    /// ```
    #[instrument(
        name = "engine.bottleneck_edge",
        level = "debug",
        err,
        skip(self, edges),
        fields(
            element_count = edges.element_count(),
            edge_count = edges.len(),
            edges_consumed = field::Empty,
        ),
    )]
    pub fn bottleneck_edge<W: Copy + PartialOrd>(
        &self,
        edges: EdgeSequence<'_, W>,
    ) -> Result<BottleneckEdge<W>> {
        let element_count = edges.element_count();
        if element_count == 1 {
            return Err(ClusterError::SingleElement);
        }

        let mut session = QuerySession::new(edges)?;
        while let Some(edge) = session.next_edge() {
            if !session.attempt(edge)? {
                continue;
            }
            if session.component_size(edge.source())? == element_count {
                let consumed = session.edges_consumed();
                Span::current().record("edges_consumed", consumed);
                debug!(
                    source = edge.source(),
                    target = edge.target(),
                    merges = session.merges(),
                    "bottleneck edge found"
                );
                return Ok(BottleneckEdge::new(edge, consumed));
            }
        }

        let consumed = session.edges_consumed();
        Span::current().record("edges_consumed", consumed);
        Err(ClusterError::Disconnected {
            element_count,
            largest_component: session.store().largest_component(),
            edges_consumed: consumed,
        })
    }
}

/// Multiplies component sizes, failing instead of wrapping on overflow.
fn multiply_sizes(sizes: &[usize]) -> Result<u64> {
    sizes
        .iter()
        .try_fold(1_u64, |acc, &size| {
            u64::try_from(size).ok().and_then(|wide| acc.checked_mul(wide))
        })
        .ok_or_else(|| ClusterError::ProductOverflow {
            sizes: sizes.to_vec(),
        })
}

/// Runs a component product query with the default component count.
///
/// Shorthand for building a [`ClusterEngine`] with `attempt_limit` and
/// validating `edges` against `element_count`.
///
/// # Errors
/// - [`ClusterError::InvalidAttemptLimit`] when `attempt_limit == 0`.
/// - Any validation error from [`EdgeSequence::new`].
/// - [`ClusterError::ProductOverflow`] from the query itself.
pub fn component_product<W: Copy + PartialOrd>(
    element_count: usize,
    edges: &[WeightedEdge<W>],
    attempt_limit: usize,
) -> Result<ComponentProduct> {
    let engine = ClusterEngineBuilder::new()
        .with_attempt_limit(attempt_limit)
        .build()?;
    engine.component_product(EdgeSequence::new(element_count, edges)?)
}

/// Runs a bottleneck edge query.
///
/// # Errors
/// - Any validation error from [`EdgeSequence::new`].
/// - [`ClusterError::SingleElement`] or [`ClusterError::Disconnected`] from
///   the query itself.
pub fn bottleneck_edge<W: Copy + PartialOrd>(
    element_count: usize,
    edges: &[WeightedEdge<W>],
) -> Result<BottleneckEdge<W>> {
    let engine = ClusterEngineBuilder::new().build()?;
    engine.bottleneck_edge(EdgeSequence::new(element_count, edges)?)
}

#[cfg(test)]
mod property;
