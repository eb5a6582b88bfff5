//! Seeded synthetic point clouds.

use junction_providers_points::{Point3, PointCloud};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Uniform random cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticCloudConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Coordinates are drawn from `0..extent` on every axis.
    pub extent: i32,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates `config.point_count` points uniformly inside the cube
/// `[0, extent)^3`.
///
/// The same configuration always yields the same cloud.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when the point count is zero or
/// the extent is not positive.
pub fn synthetic_cloud(config: &SyntheticCloudConfig) -> Result<PointCloud, BenchSetupError> {
    if config.point_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "point_count",
        });
    }
    if config.extent <= 0 {
        return Err(BenchSetupError::ZeroValue { context: "extent" });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let points = (0..config.point_count)
        .map(|_| {
            Point3::new(
                rng.gen_range(0..config.extent),
                rng.gen_range(0..config.extent),
                rng.gen_range(0..config.extent),
            )
        })
        .collect();
    Ok(PointCloud::new("synthetic-uniform", points)?)
}
