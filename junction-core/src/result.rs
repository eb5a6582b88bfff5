//! Query results returned by the cluster engine.

use crate::WeightedEdge;

/// Outcome of a bounded-attempt component product query.
///
/// # Examples
/// ```
/// use junction_core::{WeightedEdge, component_product};
///
/// let edges = [
///     WeightedEdge::new(0, 1, 1_u64),
///     WeightedEdge::new(2, 3, 2),
///     WeightedEdge::new(0, 1, 3),
/// ];
/// let outcome = component_product(5, &edges, 3)?;
/// assert_eq!(outcome.product(), 4);
/// assert_eq!(outcome.sizes(), &[2, 2, 1]);
/// assert_eq!(outcome.attempts(), 3);
/// assert_eq!(outcome.merges(), 2);
/// # Ok::<(), junction_core::ClusterError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComponentProduct {
    product: u64,
    sizes: Vec<usize>,
    attempts: usize,
    merges: usize,
    component_count: usize,
}

impl ComponentProduct {
    pub(crate) const fn new(
        product: u64,
        sizes: Vec<usize>,
        attempts: usize,
        merges: usize,
        component_count: usize,
    ) -> Self {
        Self {
            product,
            sizes,
            attempts,
            merges,
            component_count,
        }
    }

    /// Returns the product of the selected component sizes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn product(&self) -> u64 { self.product }

    /// Returns the sizes that contributed to the product, largest first.
    ///
    /// Holds fewer entries than requested when fewer components exist; the
    /// missing slots contribute a factor of one.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Returns how many edges were attempted, including redundant ones.
    #[must_use]
    #[rustfmt::skip]
    pub const fn attempts(&self) -> usize { self.attempts }

    /// Returns how many attempts actually merged two components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn merges(&self) -> usize { self.merges }

    /// Returns the number of components after the last attempt.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }
}

/// The edge whose merge first joined every element into one component.
///
/// # Examples
/// ```
/// use junction_core::{WeightedEdge, bottleneck_edge};
///
/// let edges = [
///     WeightedEdge::new(0, 1, 1_u64),
///     WeightedEdge::new(2, 3, 2),
///     WeightedEdge::new(1, 2, 3),
///     WeightedEdge::new(0, 3, 4),
/// ];
/// let bottleneck = bottleneck_edge(4, &edges)?;
/// assert_eq!(bottleneck.endpoints(), (1, 2));
/// assert_eq!(bottleneck.weight(), 3);
/// assert_eq!(bottleneck.edges_consumed(), 3);
/// # Ok::<(), junction_core::ClusterError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BottleneckEdge<W> {
    edge: WeightedEdge<W>,
    edges_consumed: usize,
}

impl<W: Copy> BottleneckEdge<W> {
    pub(crate) const fn new(edge: WeightedEdge<W>, edges_consumed: usize) -> Self {
        Self {
            edge,
            edges_consumed,
        }
    }

    /// Returns the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> WeightedEdge<W> { self.edge }

    /// Returns the first endpoint of the connecting edge.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.edge.source()
    }

    /// Returns the second endpoint of the connecting edge.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.edge.target()
    }

    /// Returns both endpoints of the connecting edge.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        self.edge.endpoints()
    }

    /// Returns the weight of the connecting edge.
    #[must_use]
    pub const fn weight(&self) -> W {
        self.edge.weight()
    }

    /// Returns how many edges were read, the connecting edge included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges_consumed(&self) -> usize { self.edges_consumed }
}
