//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use junction_core::ClusterError;
use junction_providers_points::PointsError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building the point cloud or its edges failed.
    #[error("point cloud setup failed: {0}")]
    Points(#[from] PointsError),
    /// Engine configuration or edge validation failed.
    #[error("cluster setup failed: {0}")]
    Cluster(#[from] ClusterError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// Description of the parameter that was zero.
        context: &'static str,
    },
}
