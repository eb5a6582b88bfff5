//! Junction core library.
//!
//! Kruskal-style clustering over a weight-ordered edge sequence, backed by a
//! union-by-size disjoint set with path compression. Two queries share the
//! same sweep:
//!
//! - [`component_product`] spends a bounded number of edge attempts and
//!   multiplies the sizes of the largest resulting components;
//! - [`bottleneck_edge`] reports the edge whose merge first joins every
//!   element into one component.
//!
//! Edges are produced and sorted by the caller; see
//! `junction-providers-points` for an all-pairs distance supplier.

mod builder;
mod edge;
mod engine;
mod error;
mod result;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{ClusterEngineBuilder, DEFAULT_ATTEMPT_LIMIT, DEFAULT_TOP_COMPONENTS},
    edge::{EdgeSequence, WeightedEdge},
    engine::{ClusterEngine, QuerySession, bottleneck_edge, component_product},
    error::{ClusterError, ClusterErrorCode, Result},
    result::{BottleneckEdge, ComponentProduct},
    union_find::DisjointSet,
};
