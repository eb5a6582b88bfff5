//! Error types for the junction core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced by the union-find store and the cluster query engine.
///
/// Precondition violations (bad indices, empty element sets, invalid limits,
/// unsorted input) are reported before any union is performed. The
/// [`ClusterError::Disconnected`] variant is the only data-consistency
/// failure: the supplied edges never joined every element.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ClusterError {
    /// The element count was zero.
    #[error("element set must contain at least one element")]
    EmptyElementSet,
    /// A bottleneck query was requested over a single element.
    #[error("bottleneck query requires at least two elements")]
    SingleElement,
    /// An element index fell outside `[0, element_count)`.
    #[error("element {element} is out of range for {element_count} elements")]
    ElementOutOfRange {
        /// The offending element index.
        element: usize,
        /// Number of elements managed by the store.
        element_count: usize,
    },
    /// The attempt limit for a bounded query was zero.
    #[error("attempt_limit must be at least 1 (got {got})")]
    InvalidAttemptLimit {
        /// The invalid limit supplied by the caller.
        got: usize,
    },
    /// The number of components contributing to the product was zero.
    #[error("top_components must be at least 1 (got {got})")]
    InvalidTopComponents {
        /// The invalid component count supplied by the caller.
        got: usize,
    },
    /// Edge weights were not in non-decreasing order.
    #[error("edge weight at position {position} is lower than its predecessor or incomparable")]
    UnsortedEdges {
        /// Position of the first edge that breaks the ordering.
        position: usize,
    },
    /// The edge sequence ran out before all elements were connected.
    #[error(
        "edges exhausted after {edges_consumed} without connecting all {element_count} elements \
         (largest component has {largest_component})"
    )]
    Disconnected {
        /// Number of elements that should have been connected.
        element_count: usize,
        /// Size of the largest component reached.
        largest_component: usize,
        /// Number of edges consumed before the sequence ran out.
        edges_consumed: usize,
    },
    /// The product of component sizes did not fit in a `u64`.
    #[error("product of component sizes {sizes:?} overflows u64")]
    ProductOverflow {
        /// Component sizes that were being multiplied.
        sizes: Vec<usize>,
    },
}

define_error_codes! {
    /// Stable codes describing [`ClusterError`] variants.
    enum ClusterErrorCode for ClusterError {
        /// The element count was zero.
        EmptyElementSet => EmptyElementSet => "JUNCTION_EMPTY_ELEMENT_SET",
        /// A bottleneck query was requested over a single element.
        SingleElement => SingleElement => "JUNCTION_SINGLE_ELEMENT",
        /// An element index fell outside the store.
        ElementOutOfRange => ElementOutOfRange { .. } => "JUNCTION_ELEMENT_OUT_OF_RANGE",
        /// The attempt limit was zero.
        InvalidAttemptLimit => InvalidAttemptLimit { .. } => "JUNCTION_INVALID_ATTEMPT_LIMIT",
        /// The number of product components was zero.
        InvalidTopComponents => InvalidTopComponents { .. } => "JUNCTION_INVALID_TOP_COMPONENTS",
        /// Edge weights were not in non-decreasing order.
        UnsortedEdges => UnsortedEdges { .. } => "JUNCTION_UNSORTED_EDGES",
        /// The edges never connected every element.
        Disconnected => Disconnected { .. } => "JUNCTION_DISCONNECTED",
        /// The component size product overflowed.
        ProductOverflow => ProductOverflow { .. } => "JUNCTION_PRODUCT_OVERFLOW",
    }
}

impl ClusterError {
    /// Returns `true` when the error stems from the input data rather than a
    /// caller precondition.
    ///
    /// # Examples
    /// ```
    /// use junction_core::ClusterError;
    ///
    /// let err = ClusterError::Disconnected {
    ///     element_count: 5,
    ///     largest_component: 3,
    ///     edges_consumed: 3,
    /// };
    /// assert!(err.is_data_error());
    /// assert!(!ClusterError::EmptyElementSet.is_data_error());
    /// ```
    #[must_use]
    pub const fn is_data_error(&self) -> bool {
        matches!(self, Self::Disconnected { .. })
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ClusterError>;
